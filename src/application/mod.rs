/// Typed services wrapping the HTTP client
pub mod services;
