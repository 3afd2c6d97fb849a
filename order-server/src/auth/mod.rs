//! Authentication Module
//!
//! JWT service and the middleware that guards staff routes.

mod jwt;
mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
