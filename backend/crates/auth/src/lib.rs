//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application config
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router, session guard
//!
//! ## Features
//! - Registration with username + email + password
//! - Login by username or email
//! - Server-side sessions with HMAC-signed cookie tokens
//! - `require_session` middleware guarding protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Unknown account and wrong password are indistinguishable to the client
//! - Session cookie is HttpOnly and tamper-evident

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGuardState, CurrentUser, require_session};
pub use presentation::router::{auth_router, auth_router_generic};
