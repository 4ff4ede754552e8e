//! Backend endpoint configuration.
//!
//! The hosted service root and its publishable key are fixed at build
//! time; override with `CLASSBOARD_API_URL` / `CLASSBOARD_API_KEY`.

/// Base URL of the hosted backend; the REST and auth roots hang off it.
pub fn api_base() -> &'static str {
    option_env!("CLASSBOARD_API_URL").unwrap_or("http://localhost:54321")
}

/// Publishable API key sent with every request.
pub fn api_key() -> &'static str {
    option_env!("CLASSBOARD_API_KEY").unwrap_or("dev-anon-key")
}
