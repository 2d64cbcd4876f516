/// Backend base URL.
/// Fixed at compile time:
/// - Development: http://localhost:3000 (default)
/// - Production: via BACKEND_URL env var (forwarded from .env by build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};
