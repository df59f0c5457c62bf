use sha2::{Digest, Sha256};

/// Hash identifier for a public key: lowercase hex SHA-256 of the raw key
/// bytes. Deterministic in the public key alone — the same key always maps
/// to the same id. Used for display and audit, not as a secret.
pub fn hash_id(public_key: &[u8]) -> String {
    let digest = Sha256::digest(public_key);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// First 8 characters of a hash id, for compact display.
pub fn short_fingerprint(hash_id: &str) -> String {
    hash_id.chars().take(8).collect()
}
