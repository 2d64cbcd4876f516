pub mod credentials;
pub mod navigation;
pub mod session;

pub use credentials::{CredentialStore, Credentials, LocalCredentialStore};
pub use navigation::{BrowserNavigator, Navigator, Route};
pub use session::{SessionState, SessionStore, ToastKind, ToastMessage};
