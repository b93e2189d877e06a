//! Route Guard
//!
//! `require_session` sits in front of every protected route. It
//! resolves the session cookie before any domain logic runs and hands
//! the authenticated identity downstream as a request extension.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use platform::cookie;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// State captured by the guard closure
pub struct AuthGuardState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub session_repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for AuthGuardState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            session_repo: Arc::clone(&self.session_repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Authenticated identity, inserted into the request extensions by
/// [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

/// Reject the request unless it carries a valid session cookie
pub async fn require_session<S>(
    state: AuthGuardState<S>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
    else {
        return AuthError::SessionInvalid.into_response();
    };

    let use_case = CheckSessionUseCase::new(
        Arc::clone(&state.session_repo),
        Arc::clone(&state.config),
    );

    let session = match use_case.get_session(&token).await {
        Ok(session) => session,
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        username: session.username,
    });

    next.run(req).await
}
