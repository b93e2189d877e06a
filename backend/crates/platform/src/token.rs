//! Signed Session Tokens
//!
//! An opaque, tamper-evident token binding a client to a server-side
//! session row. The token is `<session_id>.<base64url(HMAC-SHA256)>`:
//! the session id is public, the signature proves the server issued it.
//! Verification failures carry no detail a client could use to
//! distinguish "never issued" from "tampered".

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not in `<id>.<signature>` form, or the id is not a UUID
    #[error("Malformed session token")]
    Malformed,

    /// Signature does not match
    #[error("Session token signature mismatch")]
    SignatureMismatch,
}

fn mac(secret: &[u8; 32], session_id: &str) -> HmacSha256 {
    // A 32-byte key is always accepted
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    mac
}

/// Sign a session id into a client-carriable token
pub fn sign_session_id(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();
    let signature = mac(secret, &session_id).finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token and extract the session id
///
/// The HMAC comparison is constant-time (`Mac::verify_slice`).
pub fn verify_session_token(secret: &[u8; 32], token: &str) -> Result<Uuid, TokenError> {
    let (session_id, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed)?;

    mac(secret, session_id)
        .verify_slice(&signature)
        .map_err(|_| TokenError::SignatureMismatch)?;

    session_id.parse().map_err(|_| TokenError::Malformed)
}
