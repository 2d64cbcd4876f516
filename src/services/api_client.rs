// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here, just requests against the backend.
// ============================================================================

use gloo_net::http::Request;

use crate::models::{ContactFormData, Customer, LoginFormData, LoginResponse, RegisterFormData};
use crate::services::error::ApiError;
use crate::services::CustomerApi;
use crate::utils::constants::BACKEND_URL;

/// API client - HTTP communication only (stateless).
/// Bearer tokens are passed per call; the client carries no session state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerApi for ApiClient {
    /// Create a new customer record.
    async fn register_customer(&self, data: &RegisterFormData) -> Result<(), ApiError> {
        let url = format!("{}/customers", self.base_url);

        log::info!("📝 Registering customer: {}", data.email);

        let response = Request::post(&url)
            .json(data)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    /// Authenticate and obtain the session token.
    async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/login", self.base_url);

        log::info!("🔐 Logging in: {}", data.email);

        let response = Request::post(&url)
            .json(data)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch a customer by id, with the nested contact list.
    async fn fetch_customer(&self, customer_id: &str, token: &str) -> Result<Customer, ApiError> {
        let url = format!("{}/customers/{}", self.base_url, customer_id);

        log::info!("📋 Fetching customer: {}", customer_id);

        let response = Request::get(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }

        let customer = response
            .json::<Customer>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!(
            "✅ Customer {} loaded ({} contacts)",
            customer.id,
            customer.contacts.len()
        );

        Ok(customer)
    }

    async fn create_contact(&self, token: &str, data: &ContactFormData) -> Result<(), ApiError> {
        let url = format!("{}/contacts", self.base_url);

        log::info!("➕ Creating contact: {}", data.name);

        let response = Request::post(&url)
            .header("Authorization", &Self::bearer(token))
            .json(data)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    async fn update_contact(
        &self,
        token: &str,
        contact_id: &str,
        data: &ContactFormData,
    ) -> Result<(), ApiError> {
        let url = format!("{}/contacts/{}", self.base_url, contact_id);

        log::info!("✏️ Updating contact: {}", contact_id);

        let response = Request::patch(&url)
            .header("Authorization", &Self::bearer(token))
            .json(data)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    async fn delete_contact(&self, token: &str, contact_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/contacts/{}", self.base_url, contact_id);

        log::info!("🗑️ Deleting contact: {}", contact_id);

        let response = Request::delete(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
