use gloo_net::http::Response;
use serde::Deserialize;
use thiserror::Error;

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (no response from the server).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build a `Server` error from a non-2xx response, preferring the
    /// backend's own `{message}` body over the bare status line.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { message: Some(msg) }) => msg,
            _ => format!("HTTP {}: {}", status, response.status_text()),
        };
        ApiError::Server { status, message }
    }

    /// Message suitable for showing to the end user: the server's own words
    /// when it sent any, a short description otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_surface_the_backend_message() {
        let err = ApiError::Server {
            status: 401,
            message: "expired".to_string(),
        };
        assert_eq!(err.user_message(), "expired");
        assert_eq!(err.to_string(), "expired");
    }

    #[test]
    fn network_errors_describe_themselves() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "network error: connection refused");
    }
}
