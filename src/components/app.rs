use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::{use_session, SessionHandle, SessionProvider};
use crate::services::ApiClient;
use crate::state::credentials::LocalCredentialStore;
use crate::state::navigation::{BrowserNavigator, Route};
use crate::state::session::SessionStore;

use super::{Dashboard, LoginScreen, RegisterScreen, Toast};

#[function_component(App)]
pub fn app() -> Html {
    // One store for the whole app, injected explicitly through the provider.
    let session = use_memo((), |_| {
        SessionHandle::new(Rc::new(SessionStore::new(
            ApiClient::new(),
            Rc::new(LocalCredentialStore),
            Rc::new(BrowserNavigator::new()),
        )))
    });

    html! {
        <SessionProvider session={(*session).clone()}>
            <Shell />
        </SessionProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();
    let update = use_force_update();

    // Re-render on every store change, then restore the session. Keyed on
    // mount only, so the restore runs exactly once per application start.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.subscribe(move || update.force_update());
            wasm_bindgen_futures::spawn_local({
                let session = session.clone();
                async move {
                    session.restore_session().await;
                }
            });
            || ()
        });
    }

    let view = match session.route() {
        Route::Login => html! { <LoginScreen /> },
        Route::Register => html! { <RegisterScreen /> },
        Route::Dashboard => html! { <Dashboard /> },
    };

    html! {
        <>
            { view }
            <Toast />
            if session.loading() {
                <div class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            }
        </>
    }
}
