pub mod api_client;
pub mod error;

pub use api_client::ApiClient;
pub use error::ApiError;

use crate::models::{ContactFormData, Customer, LoginFormData, LoginResponse, RegisterFormData};

/// The slice of the backend the session store consumes. Split out as a trait
/// so the store can run against a scripted backend in unit tests.
///
/// Authenticated calls take the bearer token explicitly; there is no shared
/// mutable default header anywhere.
#[allow(async_fn_in_trait)]
pub trait CustomerApi {
    async fn register_customer(&self, data: &RegisterFormData) -> Result<(), ApiError>;

    async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, ApiError>;

    async fn fetch_customer(&self, customer_id: &str, token: &str) -> Result<Customer, ApiError>;

    async fn create_contact(&self, token: &str, data: &ContactFormData) -> Result<(), ApiError>;

    async fn update_contact(
        &self,
        token: &str,
        contact_id: &str,
        data: &ContactFormData,
    ) -> Result<(), ApiError>;

    async fn delete_contact(&self, token: &str, contact_id: &str) -> Result<(), ApiError>;
}
