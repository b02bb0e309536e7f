//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, secure random bytes)
//! - Password hashing (Argon2id)
//! - Bearer token extraction from the `Authorization` header

pub mod bearer;
pub mod crypto;
pub mod password;
