//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests substitute in-memory fakes.

use kernel::id::SessionId;

use crate::domain::entity::{session::Session, user::User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user. Uniqueness violations on username or email
    /// surface as `UsernameTaken` / `EmailTaken`, never as a crash.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user whose canonical username OR email matches the
    /// identifier, in one lookup
    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by ID
    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<Session>>;

    /// Persist an updated last-activity timestamp
    async fn touch(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session, returning the number of rows removed.
    /// Deleting an absent session is not an error.
    async fn delete(&self, session_id: SessionId) -> AuthResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
