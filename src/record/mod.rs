//! Record module: the KeyRecord identity payload with canonical JSON
//! serialization, and the two operations that drive the envelope to
//! produce/consume the on-disk key-file text.
//!
//! A key file is a single line of text: the base64url envelope encoding of
//! the sealed canonical JSON of one KeyRecord. The record holds an Ed25519
//! key pair; the private key never exists outside the sealed envelope and
//! the decoded in-memory record.

use base64::Engine;
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{EnvelopeError, KeyDecodeError};
use crate::keys::fingerprint;
use crate::envelope;

/// The protected identity payload.
///
/// Fields are in alphabetical order. This is deliberate: serde serializes
/// struct fields in declaration order, so alphabetical order gives a
/// deterministic canonical JSON form without the `preserve_order`
/// serde_json feature. Two records with the same field values always
/// serialize to identical bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// Lowercase hex SHA-256 of the raw public key bytes. Deterministic in
    /// `public_key` alone; used for display/audit, not as a secret.
    pub hash_id: String,
    /// Operator-supplied label. No uniqueness is enforced at this layer.
    pub name: String,
    /// Base64 (standard alphabet) of the raw 32-byte Ed25519 signing-key
    /// seed. Sensitive: must never appear in an unencrypted artifact.
    pub private_key: String,
    /// Base64 (standard alphabet) of the raw 32-byte Ed25519 verifying key.
    pub public_key: String,
}

impl KeyRecord {
    /// Build a record from a signing key, computing `hash_id` from the
    /// verifying key.
    pub fn from_signing_key(name: &str, signing_key: &SigningKey) -> Self {
        let b64 = base64::engine::general_purpose::STANDARD;
        let public_bytes = signing_key.verifying_key().to_bytes();
        KeyRecord {
            hash_id: fingerprint::hash_id(&public_bytes),
            name: name.to_string(),
            private_key: b64.encode(signing_key.to_bytes()),
            public_key: b64.encode(public_bytes),
        }
    }

    /// Canonical serialized form: compact JSON, fields alphabetical.
    pub fn to_canonical_json(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| anyhow::anyhow!("record serialization error: {}", e))
    }
}

/// Default record label used when the operator supplies none.
pub const DEFAULT_KEY_NAME: &str = "default";

/// Generate a fresh Ed25519 key pair, assemble a KeyRecord, seal it under
/// `password`, and return the printable key-file text. The caller owns
/// storage; this function touches no files.
///
/// Sealing draws fresh randomness every call, so two invocations with the
/// same password produce different text that decodes to different key
/// pairs — there is no way to regenerate a lost record.
pub fn generate_encrypted_key_string(password: &str, name: &str) -> anyhow::Result<String> {
    let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
    let record = KeyRecord::from_signing_key(name, &signing_key);
    let plaintext = Zeroizing::new(record.to_canonical_json()?);
    envelope::seal_to_text(&plaintext, password)
}

/// Parse key-file text and recover the KeyRecord.
///
/// The two expected operator mistakes map to distinct messages: structural
/// problems (not an envelope at all, unknown version) become
/// `InvalidFormat`, while a failed tag check becomes
/// `WrongPasswordOrCorrupted`. Neither path panics.
pub fn decode_encrypted_key_string(
    text: &str,
    password: &str,
) -> Result<KeyRecord, KeyDecodeError> {
    let plaintext = Zeroizing::new(
        envelope::open_from_text(text, password).map_err(|e| match e {
            EnvelopeError::Authentication => KeyDecodeError::WrongPasswordOrCorrupted,
            EnvelopeError::Malformed(msg) => KeyDecodeError::InvalidFormat(msg.to_string()),
            EnvelopeError::UnsupportedVersion(v) => {
                KeyDecodeError::InvalidFormat(format!("unsupported envelope version ({v})"))
            }
        })?,
    );
    serde_json::from_slice(&plaintext)
        .map_err(|_| KeyDecodeError::InvalidFormat("payload is not a key record".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_decode_round_trip() {
        let text = generate_encrypted_key_string("S3cr3t!", "unit test key")
            .expect("generate should succeed");
        let record =
            decode_encrypted_key_string(&text, "S3cr3t!").expect("decode should round-trip");
        assert_eq!(record.name, "unit test key");
        assert!(!record.public_key.is_empty(), "public key must be non-empty");
        assert!(!record.private_key.is_empty(), "private key must be non-empty");
    }

    #[test]
    fn test_hash_id_derived_from_public_key() {
        let text = generate_encrypted_key_string("pw", DEFAULT_KEY_NAME)
            .expect("generate should succeed");
        let record = decode_encrypted_key_string(&text, "pw").expect("decode should succeed");
        let public_bytes = base64::engine::general_purpose::STANDARD
            .decode(&record.public_key)
            .expect("public key must be valid base64");
        assert_eq!(
            record.hash_id,
            fingerprint::hash_id(&public_bytes),
            "hash_id must be a deterministic function of the public key alone"
        );
    }

    #[test]
    fn test_decode_wrong_password() {
        let text = generate_encrypted_key_string("S3cr3t!", DEFAULT_KEY_NAME)
            .expect("generate should succeed");
        let err = decode_encrypted_key_string(&text, "wrong").unwrap_err();
        assert!(
            matches!(err, KeyDecodeError::WrongPasswordOrCorrupted),
            "wrong password must map to WrongPasswordOrCorrupted, got: {:?}",
            err
        );
        assert!(
            err.to_string().contains("password"),
            "message should mention the password, got: {}",
            err
        );
    }

    #[test]
    fn test_decode_malformed_text() {
        let err = decode_encrypted_key_string("not-a-valid-envelope", "any").unwrap_err();
        assert!(
            matches!(err, KeyDecodeError::InvalidFormat(_)),
            "garbage input must map to InvalidFormat, got: {:?}",
            err
        );
        assert!(
            err.to_string().contains("format"),
            "message should mention the format, got: {}",
            err
        );
    }

    #[test]
    fn test_canonical_json_deterministic() {
        let signing_key = SigningKey::from_bytes(&[42u8; 32]);
        let a = KeyRecord::from_signing_key("n", &signing_key);
        let b = KeyRecord::from_signing_key("n", &signing_key);
        assert_eq!(
            a.to_canonical_json().unwrap(),
            b.to_canonical_json().unwrap(),
            "same record must serialize to identical bytes"
        );
    }

    #[test]
    fn test_two_generations_differ() {
        let t1 = generate_encrypted_key_string("pw", DEFAULT_KEY_NAME).expect("first generate");
        let t2 = generate_encrypted_key_string("pw", DEFAULT_KEY_NAME).expect("second generate");
        assert_ne!(t1, t2, "each generation must produce a fresh key pair and envelope");
        let r1 = decode_encrypted_key_string(&t1, "pw").expect("first decode");
        let r2 = decode_encrypted_key_string(&t2, "pw").expect("second decode");
        assert_ne!(r1.public_key, r2.public_key, "key pairs must be independent");
    }
}
