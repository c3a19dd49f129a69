//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the cookie-backed session scope.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod session_scope;

pub use handlers::AuthAppState;
pub use router::auth_router;
pub use session_scope::CookieSessionScope;
