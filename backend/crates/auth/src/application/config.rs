//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at
//! startup and passed into routers explicitly; never an ambient global.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (12 hours by default)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_token".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random secret)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie settings for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}
