use sha2::{Digest, Sha256};

/// SHA-256 of a session id. Only this digest ever leaves the process.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
