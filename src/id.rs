//! Identifier and token generation.

use rand::RngCore;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Number of random bytes behind a session or access token.
const TOKEN_BYTES: usize = 32;

/// Generates a row id: a random UUID v4 in hyphenated form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates an opaque token: 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hashes a verification token together with an application secret.
///
/// Callers that do not want raw verification tokens in the database store
/// `hash_token(token, secret)` and look it up the same way.
pub fn hash_token(token: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
