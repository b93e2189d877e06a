//! Check Session Use Case
//!
//! Verifies a session token and resolves the authenticated identity.
//! This is the workhorse behind the route guard: token signature first
//! (no storage touched for forgeries), then the session row, then
//! expiry.

use std::sync::Arc;

use kernel::id::SessionId;
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve the session behind a token, or `SessionInvalid`
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::verify_session_token(&self.config.session_secret, session_token)
            .map_err(|_| AuthError::SessionInvalid)?;
        let session_id = SessionId::from_uuid(session_id);

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();

        // Update last activity in the background; the request must not
        // wait for it or fail because of it
        let snapshot = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.touch(&snapshot).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
