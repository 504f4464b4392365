//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Random bytes and Base64 helpers
//! - Password hashing (Argon2id)
//! - Signed, expiring tokens (JWT / HS256)

pub mod crypto;
pub mod password;
pub mod token;
