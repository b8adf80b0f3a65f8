/// Authentication manager and session state
pub mod auth;
/// Wire types for the authentication endpoints
pub mod response;

pub use auth::{Auth, Session};
pub use response::Identity;
