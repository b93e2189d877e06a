//! HTTP Handlers
//!
//! Thin adapters between axum and the use cases. Handlers never touch
//! storage directly; all policy lives in the application layer.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use platform::cookie;

use crate::application::config::AuthConfig;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
};

/// Shared handler state
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(Arc::clone(&state.repo));
    let output = use_case
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    let response = RegisterResponse {
        message: "Registered successfully".to_string(),
        user_id: output.user_id,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// POST /login
///
/// On success the session token travels back in a Set-Cookie header,
/// never in the response body.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AuthError>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );
    let output = use_case
        .execute(SignInInput {
            identifier: body.identifier,
            password: body.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    let response = LoginResponse {
        message: "Login successfully".to_string(),
        user_id: output.user_id,
    };
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(response),
    )
        .into_response())
}

/// POST /logout
///
/// Unguarded and idempotent. A missing or stale cookie still yields a
/// success response and clears the cookie.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Result<Response, AuthError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    if let Some(token) = cookie::extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
        use_case.execute(&token).await?;
    }

    let clear_cookie = state.config.cookie_config().build_delete_cookie();

    let response = MessageResponse {
        message: "Logout successfully".to_string(),
    };
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, clear_cookie)],
        Json(response),
    )
        .into_response())
}
