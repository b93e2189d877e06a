//! PostgreSQL Repository Implementations
//!
//! Every method runs exactly one parameterized statement against the
//! pool; the pooled connection is released on all exit paths. User
//! input only ever reaches a statement through `bind`.

use chrono::{DateTime, Utc};
use kernel::id::{SessionId, UserId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation on user insert to the matching
/// registration failure; everything else stays a database error.
fn map_user_insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("users_email_key") => AuthError::EmailTaken,
                _ => AuthError::UsernameTaken,
            };
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                username_canonical,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.original())
        .bind(user.username.canonical())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_insert_error)?;

        Ok(())
    }

    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<User>> {
        // Usernames and emails are both stored lowercase, so a single
        // lowercased bind covers either kind of identifier
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                username_canonical,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE username_canonical = $1 OR email = $1
            "#,
        )
        .bind(identifier.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                username,
                expires_at_ms,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.user_id.as_uuid())
        .bind(&session.username)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                username,
                expires_at_ms,
                created_at,
                last_activity_at
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn touch(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE auth_sessions
            SET last_activity_at = $2
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    username_canonical: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            username: Username::from_storage(self.username, self.username_canonical),
            email: Email::from_storage(self.email),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    username: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_uuid(self.session_id),
            user_id: UserId::from_uuid(self.user_id),
            username: self.username,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
        }
    }
}
