//! Cookie Management Infrastructure
//!
//! Building and extracting the session cookie. The session cookie is
//! always HttpOnly; Secure and SameSite come from configuration.

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session_token".to_string(),
            secure: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build a Set-Cookie header value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, value),
            "HttpOnly".to_string(),
            format!("Path={}", self.path),
            format!("SameSite={}", self.same_site.as_str()),
        ];

        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={}", max_age));
        }
        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }

    /// Build a Set-Cookie header value that deletes the cookie
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![
            format!("{}=", self.name),
            "HttpOnly".to_string(),
            format!("Path={}", self.path),
            format!("SameSite={}", self.same_site.as_str()),
            "Max-Age=0".to_string(),
            "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}
