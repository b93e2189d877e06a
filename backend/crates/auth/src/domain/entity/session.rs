//! Session Entity
//!
//! Server-side record binding an opaque client token to an
//! authenticated identity. Created on login, destroyed on logout or
//! expiry. Carries `(user_id, username)` so the guard resolves the
//! acting identity with a single read.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID; only its HMAC-signed form ever reaches the client
    pub session_id: SessionId,
    /// Authenticated user
    pub user_id: UserId,
    /// Username at login time, denormalized for the guard
    pub username: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL comes from the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, username: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            username,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update the last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_not_expired() {
        let session = Session::new(UserId::new(), "alice".to_string(), Duration::hours(12));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_past_ttl_is_expired() {
        let session = Session::new(UserId::new(), "alice".to_string(), Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_touch_advances_activity() {
        let mut session = Session::new(UserId::new(), "alice".to_string(), Duration::hours(1));
        let before = session.last_activity_at;
        session.touch();
        assert!(session.last_activity_at >= before);
    }
}
