use crate::utils::storage::{load_string, remove_key, save_string};

/// Storage keys for the persisted session. Both entries are set together on
/// login and cleared together on invalidation.
pub const TOKEN_KEY: &str = "@INFINITY-TOKEN";
pub const CUSTOMER_KEY: &str = "@INFINITY-CUSTOMER";

/// The (token, customer id) pair identifying an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub customer_id: String,
}

/// Durable storage for the credential pair. Present ⇔ a session exists.
pub trait CredentialStore {
    fn load(&self) -> Option<Credentials>;
    fn save(&self, credentials: &Credentials);
    fn clear(&self);
}

/// localStorage-backed store under the fixed keys.
pub struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Option<Credentials> {
        let token = load_string(TOKEN_KEY)?;
        let customer_id = load_string(CUSTOMER_KEY)?;
        Some(Credentials { token, customer_id })
    }

    fn save(&self, credentials: &Credentials) {
        if let Err(e) = save_string(TOKEN_KEY, &credentials.token) {
            log::error!("❌ Failed to persist token: {}", e);
        }
        if let Err(e) = save_string(CUSTOMER_KEY, &credentials.customer_id) {
            log::error!("❌ Failed to persist customer id: {}", e);
        }
    }

    fn clear(&self) {
        let _ = remove_key(TOKEN_KEY);
        let _ = remove_key(CUSTOMER_KEY);
    }
}
