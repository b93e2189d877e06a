//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = Username::new(input.username)?;
        let email = Email::new(input.email)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash);

        // Uniqueness lives in the storage constraints; the repository
        // maps violations to UsernameTaken / EmailTaken
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
