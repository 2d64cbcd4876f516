// ============================================================================
// SESSION CONTEXT - Share the session store across components
// ============================================================================
// The store is constructed once at app start and injected explicitly through
// a provider; there is no implicit default instance.
// ============================================================================

use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::session::SessionStore;

/// Concrete store type the UI works with.
pub type AppSessionStore = SessionStore<ApiClient>;

/// Context handle wrapping the single store instance. Compared by identity:
/// the store never changes, only its state does.
#[derive(Clone)]
pub struct SessionHandle(Rc<AppSessionStore>);

impl SessionHandle {
    pub fn new(store: Rc<AppSessionStore>) -> Self {
        Self(store)
    }
}

impl Deref for SessionHandle {
    type Target = AppSessionStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Read the session store from context. Using it outside `SessionProvider`
/// is a programming error and fails fast.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be called inside SessionProvider")
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub session: SessionHandle,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionHandle> context={props.session.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
