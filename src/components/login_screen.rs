use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::LoginFormData;
use crate::state::navigation::Route;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    if let Some(win) = window() {
                        let _ = win.alert_with_message("Please fill in all fields");
                    }
                    return;
                }

                let session = session.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    session.login(LoginFormData { email, password }).await;
                });
            }
        })
    };

    let go_register = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.go_to(Route::Register))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1 class="logo">{"Infinity Contacts"}</h1>
                    <p>{"Manage your customers' contacts in one place"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <h2>{"Login"}</h2>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Enter your email"
                            ref={email_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            ref={password_ref}
                        />
                    </div>

                    <button type="submit" class="primary-button">{"Sign in"}</button>

                    <div class="auth-footer">
                        <span>{"Don't have an account yet?"}</span>
                        <button type="button" class="link-button" onclick={go_register}>
                            {"Register"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
