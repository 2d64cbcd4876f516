use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::RegisterFormData;
use crate::state::navigation::Route;

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let session = use_session();
    let name_ref = use_node_ref();
    let cnpj_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let phone_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let name_ref = name_ref.clone();
        let cnpj_ref = cnpj_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let phone_ref = phone_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let values = (
                name_ref.cast::<HtmlInputElement>(),
                cnpj_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
            );

            if let (Some(name), Some(cnpj), Some(email), Some(password), Some(phone)) = values {
                let data = RegisterFormData {
                    customer_name: name.value(),
                    cnpj: cnpj.value(),
                    email: email.value(),
                    password: password.value(),
                    phone: phone.value(),
                };

                if data.customer_name.is_empty()
                    || data.cnpj.is_empty()
                    || data.email.is_empty()
                    || data.password.is_empty()
                {
                    if let Some(win) = window() {
                        let _ = win.alert_with_message("Please fill in all required fields");
                    }
                    return;
                }

                let session = session.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    session.register(data).await;
                });
            }
        })
    };

    let back_to_login = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.go_to(Route::Login))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1 class="logo">{"Infinity Contacts"}</h1>
                    <p>{"Create your company account"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <h2>{"Register"}</h2>

                    <div class="form-group">
                        <label for="customer_name">{"Company name"}</label>
                        <input
                            type="text"
                            id="customer_name"
                            name="customer_name"
                            placeholder="Enter the company name"
                            ref={name_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="cnpj">{"CNPJ"}</label>
                        <input
                            type="text"
                            id="cnpj"
                            name="cnpj"
                            placeholder="Registration number"
                            ref={cnpj_ref}
                        />
                    </div>

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
                            placeholder="Choose a password"
                            ref={password_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            placeholder="Contact phone (optional)"
                            ref={phone_ref}
                        />
                    </div>

                    <button type="submit" class="primary-button">{"Create account"}</button>

                    <div class="auth-footer">
                        <span>{"Already registered?"}</span>
                        <button type="button" class="link-button" onclick={back_to_login}>
                            {"Back to login"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
