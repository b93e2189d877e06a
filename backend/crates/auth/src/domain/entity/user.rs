//! User Entity
//!
//! Registered account. Immutable after registration in this core;
//! there is no profile editing or account deletion.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, username::Username};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique username (login and display)
    pub username: Username,
    /// Unique email (alternate login identifier)
    pub email: Email,
    /// Argon2id digest; the raw secret is never held here
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration time
    pub fn new(username: Username, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
