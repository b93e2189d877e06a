//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod register;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
