//! API token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Prefix carried by every generated token.
pub const API_TOKEN_PREFIX: &str = "ct_";

/// Generate a new raw API token.
#[must_use]
pub fn generate_api_token() -> String {
    format!(
        "{API_TOKEN_PREFIX}{}{}",
        Uuid::now_v7().simple(),
        Uuid::new_v4().simple()
    )
}

/// Hash a raw API token into the hex digest stored for lookups.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
