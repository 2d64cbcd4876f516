// ============================================================================
// SESSION STORE - Authentication state + customer/contact data
// ============================================================================
// Owns the authenticated customer's profile, the mirrored contact list and
// the global loading flag. Collaborators (API, credential storage, browser
// history) are injected; the store is constructed once at app start.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Contact, ContactFormData, Customer, LoginFormData, RegisterFormData};
use crate::services::CustomerApi;
use crate::state::credentials::{CredentialStore, Credentials};
use crate::state::navigation::{Navigator, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient user-facing notification; rendered by the `Toast` component and
/// auto-dismissed after a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

/// Everything the views render from.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Authenticated customer, `None` while anonymous. The contact list is
    /// read through [`SessionStore::contacts`], never stored separately.
    pub customer: Option<Customer>,
    pub loading: bool,
    pub route: Route,
    pub toast: Option<ToastMessage>,
}

impl SessionState {
    fn anonymous(route: Route) -> Self {
        Self {
            customer: None,
            loading: false,
            route,
            toast: None,
        }
    }
}

type Subscriber = Box<dyn Fn()>;

/// Session/customer store.
///
/// State machine: `Anonymous → (login | restore) → Authenticated →
/// (restore failure | logout) → Anonymous`. Every operation swallows its
/// specific error and reports through a toast; nothing is retried.
pub struct SessionStore<A: CustomerApi> {
    api: A,
    credentials: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
    state: RefCell<SessionState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<A: CustomerApi> SessionStore<A> {
    pub fn new(
        api: A,
        credentials: Rc<dyn CredentialStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        // Anonymous users land on login unless they explicitly asked for the
        // registration page.
        let initial_route = match navigator.intended() {
            Some(Route::Register) => Route::Register,
            _ => Route::Login,
        };
        Self {
            api,
            credentials,
            navigator,
            state: RefCell::new(SessionState::anonymous(initial_route)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe to state changes. Callbacks run after every mutation.
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        mutate(&mut self.state.borrow_mut());
        self.notify();
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn customer(&self) -> Option<Customer> {
        self.state.borrow().customer.clone()
    }

    /// Contact list mirrored from the last-fetched customer. Derived from
    /// `customer`, so the two can never fall out of sync.
    pub fn contacts(&self) -> Vec<Contact> {
        self.state
            .borrow()
            .customer
            .as_ref()
            .map(|c| c.contacts.clone())
            .unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn route(&self) -> Route {
        self.state.borrow().route
    }

    pub fn toast(&self) -> Option<ToastMessage> {
        self.state.borrow().toast.clone()
    }

    pub fn dismiss_toast(&self) {
        self.update(|s| s.toast = None);
    }

    /// Switch views without touching the session (login ↔ register links).
    pub fn go_to(&self, route: Route) {
        self.navigate(route, false);
    }

    fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    fn show_toast(&self, kind: ToastKind, text: impl Into<String>) {
        self.update(|s| {
            s.toast = Some(ToastMessage {
                kind,
                text: text.into(),
            })
        });
    }

    fn navigate(&self, route: Route, replace: bool) {
        self.update(|s| s.route = route);
        self.navigator.sync(route, replace);
    }

    /// Where to land after authenticating: the route the user originally
    /// asked for, falling back to the dashboard.
    fn destination(&self) -> Route {
        match self.navigator.intended() {
            Some(Route::Login) | Some(Route::Register) | None => Route::Dashboard,
            Some(route) => route,
        }
    }

    /// Create a new customer record. Never transitions session state; on
    /// success the user is sent to the login view.
    pub async fn register(&self, data: RegisterFormData) {
        self.set_loading(true);
        match self.api.register_customer(&data).await {
            Ok(()) => {
                log::info!("✅ Registration completed: {}", data.email);
                self.navigate(Route::Login, false);
                self.show_toast(ToastKind::Success, "Registration successfully completed!");
            }
            Err(e) => {
                log::error!("❌ Registration failed: {}", e);
                self.show_toast(ToastKind::Error, "Your registration failed!");
            }
        }
        self.set_loading(false);
    }

    /// Authenticate, persist the credential pair, then load the customer and
    /// redirect to the intended destination.
    pub async fn login(&self, data: LoginFormData) {
        self.set_loading(true);
        match self.api.login(&data).await {
            Ok(response) => {
                let credentials = Credentials {
                    token: response.token,
                    customer_id: response.user_id,
                };
                self.credentials.save(&credentials);
                log::info!("✅ Login succeeded for customer {}", credentials.customer_id);
                self.show_toast(ToastKind::Success, "Login successful!");
                self.load_customer(credentials).await;
            }
            Err(e) => {
                log::error!("❌ Login failed: {}", e);
                self.show_toast(ToastKind::Error, "Oops! Something went wrong, try again");
            }
        }
        self.set_loading(false);
    }

    /// Restore a session from persisted credentials. Runs exactly once per
    /// application start; with nothing persisted it is a no-op.
    pub async fn restore_session(&self) {
        let Some(credentials) = self.credentials.load() else {
            return;
        };
        log::info!(
            "🔑 Persisted credentials found, restoring session for {}",
            credentials.customer_id
        );
        self.set_loading(true);
        self.load_customer(credentials).await;
        self.set_loading(false);
    }

    /// Drop the session: clear both persisted entries and return to login.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.credentials.clear();
        self.update(|s| s.customer = None);
        self.navigate(Route::Login, true);
    }

    /// Fetch the customer for `credentials` and enter the authenticated
    /// state. On failure the credentials are treated as invalid: both
    /// persisted entries are cleared and the server's message is shown.
    async fn load_customer(&self, credentials: Credentials) {
        match self
            .api
            .fetch_customer(&credentials.customer_id, &credentials.token)
            .await
        {
            Ok(customer) => {
                self.update(|s| s.customer = Some(customer));
                self.navigate(self.destination(), true);
            }
            Err(e) => {
                log::error!("❌ Session restore failed: {}", e);
                self.credentials.clear();
                self.update(|s| s.customer = None);
                self.show_toast(ToastKind::Error, e.user_message());
            }
        }
    }

    pub async fn create_contact(&self, data: ContactFormData) {
        let Some(credentials) = self.credentials.load() else {
            return;
        };
        self.set_loading(true);
        match self.api.create_contact(&credentials.token, &data).await {
            Ok(()) => {
                log::info!("✅ Contact created: {}", data.name);
                self.show_toast(ToastKind::Success, "Contact created!");
                self.refresh_mirror(&credentials).await;
            }
            Err(e) => {
                log::error!("❌ Contact creation failed: {}", e);
                self.show_toast(ToastKind::Error, e.user_message());
            }
        }
        self.set_loading(false);
    }

    pub async fn update_contact(&self, contact_id: String, data: ContactFormData) {
        let Some(credentials) = self.credentials.load() else {
            return;
        };
        self.set_loading(true);
        match self
            .api
            .update_contact(&credentials.token, &contact_id, &data)
            .await
        {
            Ok(()) => {
                log::info!("✅ Contact updated: {}", contact_id);
                self.show_toast(ToastKind::Success, "Contact updated!");
                self.refresh_mirror(&credentials).await;
            }
            Err(e) => {
                log::error!("❌ Contact update failed: {}", e);
                self.show_toast(ToastKind::Error, e.user_message());
            }
        }
        self.set_loading(false);
    }

    pub async fn delete_contact(&self, contact_id: String) {
        let Some(credentials) = self.credentials.load() else {
            return;
        };
        self.set_loading(true);
        match self.api.delete_contact(&credentials.token, &contact_id).await {
            Ok(()) => {
                log::info!("✅ Contact removed: {}", contact_id);
                self.show_toast(ToastKind::Success, "Contact removed!");
                self.refresh_mirror(&credentials).await;
            }
            Err(e) => {
                log::error!("❌ Contact removal failed: {}", e);
                self.show_toast(ToastKind::Error, e.user_message());
            }
        }
        self.set_loading(false);
    }

    /// Re-fetch the customer so the mirrored contact list reflects whatever
    /// the backend decided. The contact lifecycle is owned by the backend.
    async fn refresh_mirror(&self, credentials: &Credentials) {
        match self
            .api
            .fetch_customer(&credentials.customer_id, &credentials.token)
            .await
        {
            Ok(customer) => self.update(|s| s.customer = Some(customer)),
            Err(e) => log::error!("❌ Contact list refresh failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::services::ApiError;
    use chrono::Utc;
    use futures::executor::block_on;

    fn contact(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: format!("contact-{}", id),
            phone: "+55 11 99999-0000".to_string(),
            email: format!("{}@example.com", id),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn customer(id: &str, contacts: Vec<Contact>) -> Customer {
        Customer {
            id: id.to_string(),
            customer_name: "ACME Ltda".to_string(),
            cnpj: 12345678000190,
            email: "contact@acme.com".to_string(),
            is_active: true,
            contacts,
        }
    }

    fn unexpected<T>() -> Result<T, ApiError> {
        Err(ApiError::Network("unexpected call".to_string()))
    }

    struct MockInner {
        calls: RefCell<Vec<String>>,
        register_result: Result<(), ApiError>,
        login_result: Result<LoginResponse, ApiError>,
        fetch_result: Result<Customer, ApiError>,
        contact_result: Result<(), ApiError>,
    }

    /// Scripted backend: fixed result per operation, calls recorded in order.
    #[derive(Clone)]
    struct MockApi(Rc<MockInner>);

    impl MockApi {
        fn new() -> Self {
            Self(Rc::new(MockInner {
                calls: RefCell::new(Vec::new()),
                register_result: unexpected(),
                login_result: unexpected(),
                fetch_result: unexpected(),
                contact_result: unexpected(),
            }))
        }

        fn with(
            register_result: Result<(), ApiError>,
            login_result: Result<LoginResponse, ApiError>,
            fetch_result: Result<Customer, ApiError>,
            contact_result: Result<(), ApiError>,
        ) -> Self {
            Self(Rc::new(MockInner {
                calls: RefCell::new(Vec::new()),
                register_result,
                login_result,
                fetch_result,
                contact_result,
            }))
        }

        fn calls(&self) -> Vec<String> {
            self.0.calls.borrow().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.0.calls.borrow_mut().push(call.into());
        }
    }

    impl CustomerApi for MockApi {
        async fn register_customer(&self, data: &RegisterFormData) -> Result<(), ApiError> {
            self.record(format!("register {}", data.email));
            self.0.register_result.clone()
        }

        async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, ApiError> {
            self.record(format!("login {}", data.email));
            self.0.login_result.clone()
        }

        async fn fetch_customer(
            &self,
            customer_id: &str,
            token: &str,
        ) -> Result<Customer, ApiError> {
            self.record(format!("fetch {} {}", customer_id, token));
            self.0.fetch_result.clone()
        }

        async fn create_contact(
            &self,
            token: &str,
            data: &ContactFormData,
        ) -> Result<(), ApiError> {
            self.record(format!("create_contact {} {}", token, data.name));
            self.0.contact_result.clone()
        }

        async fn update_contact(
            &self,
            token: &str,
            contact_id: &str,
            _data: &ContactFormData,
        ) -> Result<(), ApiError> {
            self.record(format!("update_contact {} {}", token, contact_id));
            self.0.contact_result.clone()
        }

        async fn delete_contact(&self, token: &str, contact_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete_contact {} {}", token, contact_id));
            self.0.contact_result.clone()
        }
    }

    #[derive(Default)]
    struct MemoryCredentials(RefCell<Option<Credentials>>);

    impl MemoryCredentials {
        fn preset(credentials: Credentials) -> Self {
            Self(RefCell::new(Some(credentials)))
        }

        fn stored(&self) -> Option<Credentials> {
            self.0.borrow().clone()
        }
    }

    impl CredentialStore for MemoryCredentials {
        fn load(&self) -> Option<Credentials> {
            self.0.borrow().clone()
        }

        fn save(&self, credentials: &Credentials) {
            *self.0.borrow_mut() = Some(credentials.clone());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        intended: Option<Route>,
        synced: RefCell<Vec<(Route, bool)>>,
    }

    impl RecordingNavigator {
        fn with_intended(intended: Route) -> Self {
            Self {
                intended: Some(intended),
                synced: RefCell::new(Vec::new()),
            }
        }

        fn last_sync(&self) -> Option<(Route, bool)> {
            self.synced.borrow().last().copied()
        }
    }

    impl Navigator for RecordingNavigator {
        fn sync(&self, route: Route, replace: bool) {
            self.synced.borrow_mut().push((route, replace));
        }

        fn intended(&self) -> Option<Route> {
            self.intended
        }
    }

    struct Harness {
        api: MockApi,
        credentials: Rc<MemoryCredentials>,
        navigator: Rc<RecordingNavigator>,
        store: SessionStore<MockApi>,
    }

    fn harness(api: MockApi, credentials: MemoryCredentials, navigator: RecordingNavigator) -> Harness {
        let credentials = Rc::new(credentials);
        let navigator = Rc::new(navigator);
        let store = SessionStore::new(
            api.clone(),
            credentials.clone() as Rc<dyn CredentialStore>,
            navigator.clone() as Rc<dyn Navigator>,
        );
        Harness {
            api,
            credentials,
            navigator,
            store,
        }
    }

    fn login_ok(user_id: &str, token: &str) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            user_id: user_id.to_string(),
            token: token.to_string(),
        })
    }

    #[test]
    fn login_persists_credentials_and_redirects_to_dashboard() {
        let api = MockApi::with(
            unexpected(),
            login_ok("7", "Z"),
            Ok(customer("7", vec![contact("c1")])),
            unexpected(),
        );
        let h = harness(api, MemoryCredentials::default(), RecordingNavigator::default());

        block_on(h.store.login(LoginFormData {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }));

        assert_eq!(
            h.credentials.stored(),
            Some(Credentials {
                token: "Z".to_string(),
                customer_id: "7".to_string(),
            })
        );
        assert!(!h.store.loading());
        assert_eq!(h.navigator.last_sync(), Some((Route::Dashboard, true)));
        assert_eq!(h.store.route(), Route::Dashboard);
        assert_eq!(h.store.customer().map(|c| c.id), Some("7".to_string()));
    }

    #[test]
    fn rejected_customer_load_after_login_clears_the_fresh_credentials() {
        // Authentication succeeds but the token is immediately rejected when
        // loading the customer: treated like an invalid session.
        let api = MockApi::with(
            unexpected(),
            login_ok("7", "Z"),
            Err(ApiError::Server {
                status: 401,
                message: "expired".to_string(),
            }),
            unexpected(),
        );
        let h = harness(api, MemoryCredentials::default(), RecordingNavigator::default());

        block_on(h.store.login(LoginFormData {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }));

        assert_eq!(h.api.calls(), vec!["login a@b.com".to_string(), "fetch 7 Z".to_string()]);
        assert_eq!(h.credentials.stored(), None);
        assert_eq!(h.store.customer(), None);
        let toast = h.store.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "expired");
        assert!(!h.store.loading());
        // No redirect to the dashboard without a loaded customer
        assert_eq!(h.navigator.last_sync(), None);
    }

    #[test]
    fn failed_login_leaves_session_and_storage_untouched() {
        let api = MockApi::with(
            unexpected(),
            Err(ApiError::Server {
                status: 401,
                message: "invalid credentials".to_string(),
            }),
            unexpected(),
            unexpected(),
        );
        let h = harness(api, MemoryCredentials::default(), RecordingNavigator::default());

        block_on(h.store.login(LoginFormData {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        }));

        assert_eq!(h.credentials.stored(), None);
        assert_eq!(h.store.customer(), None);
        assert!(h.store.contacts().is_empty());
        assert!(!h.store.loading());
        let toast = h.store.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "Oops! Something went wrong, try again");
        // No redirect on failure
        assert_eq!(h.navigator.last_sync(), None);
    }

    #[test]
    fn register_success_navigates_to_login() {
        let api = MockApi::with(Ok(()), unexpected(), unexpected(), unexpected());
        let h = harness(api, MemoryCredentials::default(), RecordingNavigator::default());

        block_on(h.store.register(RegisterFormData {
            customer_name: "ACME Ltda".to_string(),
            cnpj: "12345678000190".to_string(),
            email: "contact@acme.com".to_string(),
            password: "secret".to_string(),
            phone: "+55 11 99999-0000".to_string(),
        }));

        assert_eq!(h.api.calls(), vec!["register contact@acme.com".to_string()]);
        assert_eq!(h.navigator.last_sync(), Some((Route::Login, false)));
        assert_eq!(
            h.store.toast().unwrap().text,
            "Registration successfully completed!"
        );
        // Registration never touches session state
        assert_eq!(h.store.customer(), None);
        assert!(!h.store.loading());
    }

    #[test]
    fn register_failure_reports_a_generic_message() {
        let api = MockApi::with(
            Err(ApiError::Server {
                status: 409,
                message: "email already registered".to_string(),
            }),
            unexpected(),
            unexpected(),
            unexpected(),
        );
        let h = harness(api, MemoryCredentials::default(), RecordingNavigator::default());

        block_on(h.store.register(RegisterFormData {
            customer_name: "ACME Ltda".to_string(),
            cnpj: "12345678000190".to_string(),
            email: "contact@acme.com".to_string(),
            password: "secret".to_string(),
            phone: "+55 11 99999-0000".to_string(),
        }));

        let toast = h.store.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "Your registration failed!");
        assert_eq!(h.navigator.last_sync(), None);
        assert!(!h.store.loading());
    }

    #[test]
    fn restore_without_credentials_is_a_noop_twice() {
        let h = harness(
            MockApi::new(),
            MemoryCredentials::default(),
            RecordingNavigator::default(),
        );
        let before = h.store.snapshot();

        block_on(h.store.restore_session());
        block_on(h.store.restore_session());

        assert!(h.api.calls().is_empty());
        assert_eq!(h.store.snapshot(), before);
    }

    #[test]
    fn restore_success_mirrors_the_fetched_contacts() {
        let api = MockApi::with(
            unexpected(),
            unexpected(),
            Ok(customer("42", vec![contact("c1")])),
            unexpected(),
        );
        let h = harness(
            api,
            MemoryCredentials::preset(Credentials {
                token: "T".to_string(),
                customer_id: "42".to_string(),
            }),
            RecordingNavigator::default(),
        );

        block_on(h.store.restore_session());

        assert_eq!(h.api.calls(), vec!["fetch 42 T".to_string()]);
        assert_eq!(h.store.customer().map(|c| c.id), Some("42".to_string()));
        assert_eq!(h.store.contacts().len(), 1);
        assert_eq!(h.navigator.last_sync(), Some((Route::Dashboard, true)));
        assert!(!h.store.loading());
    }

    #[test]
    fn rejected_restore_clears_credentials_and_shows_server_message() {
        let api = MockApi::with(
            unexpected(),
            unexpected(),
            Err(ApiError::Server {
                status: 401,
                message: "expired".to_string(),
            }),
            unexpected(),
        );
        let h = harness(
            api,
            MemoryCredentials::preset(Credentials {
                token: "stale".to_string(),
                customer_id: "42".to_string(),
            }),
            RecordingNavigator::default(),
        );

        block_on(h.store.restore_session());

        assert_eq!(h.credentials.stored(), None);
        assert_eq!(h.store.customer(), None);
        let toast = h.store.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "expired");
        assert!(!h.store.loading());
    }

    #[test]
    fn register_url_is_honored_as_the_initial_view() {
        let h = harness(
            MockApi::new(),
            MemoryCredentials::default(),
            RecordingNavigator::with_intended(Route::Register),
        );
        assert_eq!(h.store.route(), Route::Register);
    }

    #[test]
    fn post_login_target_never_returns_to_an_auth_view() {
        // A boot URL pointing at login or register must not become the
        // post-authentication destination; those fall back to the dashboard.
        // (The no-intent fallback is covered by
        // login_persists_credentials_and_redirects_to_dashboard.)
        for intended in [Route::Login, Route::Register] {
            let api = MockApi::with(
                unexpected(),
                login_ok("7", "Z"),
                Ok(customer("7", vec![])),
                unexpected(),
            );
            let h = harness(
                api,
                MemoryCredentials::default(),
                RecordingNavigator::with_intended(intended),
            );

            block_on(h.store.login(LoginFormData {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            }));

            assert_eq!(h.navigator.last_sync(), Some((Route::Dashboard, true)));
        }
    }

    #[test]
    fn logout_drops_credentials_and_returns_to_login() {
        let api = MockApi::with(
            unexpected(),
            unexpected(),
            Ok(customer("42", vec![contact("c1")])),
            unexpected(),
        );
        let h = harness(
            api,
            MemoryCredentials::preset(Credentials {
                token: "T".to_string(),
                customer_id: "42".to_string(),
            }),
            RecordingNavigator::default(),
        );
        block_on(h.store.restore_session());
        assert!(h.store.customer().is_some());

        h.store.logout();

        assert_eq!(h.credentials.stored(), None);
        assert_eq!(h.store.customer(), None);
        assert_eq!(h.navigator.last_sync(), Some((Route::Login, true)));
    }

    #[test]
    fn creating_a_contact_refreshes_the_mirror() {
        let api = MockApi::with(
            unexpected(),
            unexpected(),
            Ok(customer("42", vec![contact("c1"), contact("c2")])),
            Ok(()),
        );
        let h = harness(
            api,
            MemoryCredentials::preset(Credentials {
                token: "T".to_string(),
                customer_id: "42".to_string(),
            }),
            RecordingNavigator::default(),
        );

        block_on(h.store.create_contact(ContactFormData {
            name: "Maria".to_string(),
            phone: "+55 11 98888-0000".to_string(),
            email: "maria@acme.com".to_string(),
        }));

        assert_eq!(
            h.api.calls(),
            vec![
                "create_contact T Maria".to_string(),
                "fetch 42 T".to_string(),
            ]
        );
        assert_eq!(h.store.contacts().len(), 2);
        assert_eq!(h.store.toast().unwrap().text, "Contact created!");
        assert!(!h.store.loading());
    }

    #[test]
    fn failed_contact_delete_keeps_the_mirror_and_surfaces_the_message() {
        let api = MockApi::with(
            unexpected(),
            unexpected(),
            Ok(customer("42", vec![contact("c1")])),
            Err(ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        let h = harness(
            api,
            MemoryCredentials::preset(Credentials {
                token: "T".to_string(),
                customer_id: "42".to_string(),
            }),
            RecordingNavigator::default(),
        );
        block_on(h.store.restore_session());
        h.store.dismiss_toast();

        block_on(h.store.delete_contact("c1".to_string()));

        assert_eq!(h.store.contacts().len(), 1);
        assert_eq!(h.store.toast().unwrap().text, "boom");
        assert!(!h.store.loading());
    }

    #[test]
    fn contact_ops_without_a_session_do_nothing() {
        let h = harness(
            MockApi::new(),
            MemoryCredentials::default(),
            RecordingNavigator::default(),
        );

        block_on(h.store.delete_contact("c1".to_string()));

        assert!(h.api.calls().is_empty());
        assert!(h.store.toast().is_none());
        assert!(!h.store.loading());
    }

    #[test]
    fn subscribers_run_on_every_mutation() {
        let h = harness(
            MockApi::new(),
            MemoryCredentials::default(),
            RecordingNavigator::default(),
        );
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = hits.clone();
            h.store.subscribe(move || *hits.borrow_mut() += 1);
        }

        h.store.go_to(Route::Register);
        h.store.dismiss_toast();

        assert_eq!(*hits.borrow(), 2);
    }
}
