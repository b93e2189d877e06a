//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (Argon2id)
//! - Signed session tokens (HMAC-SHA256)
//! - Cookie management
//! - Small cryptographic helpers

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
