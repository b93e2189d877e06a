//! Sign In Use Case
//!
//! Authenticates a user and opens a session. The identifier may be a
//! username or an email; every failure mode after the presence checks
//! collapses into the same `InvalidCredentials` outcome.

use std::sync::{Arc, LazyLock};

use chrono::Duration;
use kernel::id::UserId;
use platform::password::{ClearTextPassword, HashedPassword};
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// Username or email
    pub identifier: String,
    /// Password
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    /// Authenticated user
    pub user_id: UserId,
}

/// Digest burned on the unknown-identifier path so it costs the same
/// Argon2 work as a wrong password against a real account
static DUMMY_HASH: LazyLock<HashedPassword> = LazyLock::new(|| {
    ClearTextPassword::new("dummy credential for timing equalization".to_string())
        .expect("dummy password satisfies the policy")
        .hash()
        .expect("hashing a valid password cannot fail")
});

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let identifier = input.identifier.trim().to_string();
        if identifier.is_empty() {
            return Err(AuthError::Validation("Identifier is required".to_string()));
        }
        if input.password.trim().is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }

        // Anything the password policy rejects cannot match a stored
        // digest; report it like any other mismatch
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match self.user_repo.find_by_identifier(&identifier).await? {
            Some(user) => user,
            None => {
                // Verify against the dummy digest so an unknown account
                // is not detectable by response time
                let _ = DUMMY_HASH.verify(&password);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let password_valid = user
            .password_hash
            .verify(&password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(user.user_id, user.username.original().to_string(), ttl);
        self.session_repo.create(&session).await?;

        let session_token =
            token::sign_session_id(&self.config.session_secret, session.session_id.into_uuid());

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.user_id,
        })
    }
}
