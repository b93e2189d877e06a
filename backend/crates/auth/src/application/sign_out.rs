//! Sign Out Use Case
//!
//! Invalidates a session. Idempotent: an unverifiable token or an
//! already-deleted session is not an error.

use std::sync::Arc;

use kernel::id::SessionId;
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from the session the token refers to
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = match token::verify_session_token(&self.config.session_secret, session_token)
        {
            Ok(id) => SessionId::from_uuid(id),
            // A token this server never signed has no session to clear
            Err(_) => return Ok(()),
        };

        let deleted = self.session_repo.delete(session_id).await?;
        if deleted > 0 {
            tracing::info!(session_id = %session_id, "User signed out");
        }

        Ok(())
    }
}
