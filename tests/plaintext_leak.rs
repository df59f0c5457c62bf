/// Plaintext leak detection tests.
///
/// Verify that sealed envelopes, key-file text, and smkm:// tokens never
/// contain the protected material in any readable form — neither as raw
/// bytes nor as a base64-encoded substring.
///
/// These tests guard against regression where a refactor accidentally
/// frames the payload outside the encrypted region of the envelope.

use base64::Engine;
use smkm::{envelope, record, token};

/// Assert `needle` does not occur inside `haystack`, raw or base64'd.
fn assert_not_embedded(haystack: &[u8], needle: &[u8], what: &str) {
    assert!(
        !haystack.windows(needle.len()).any(|w| w == needle),
        "{} must not appear as raw bytes",
        what
    );
    let b64 = base64::engine::general_purpose::STANDARD.encode(needle);
    let lossy = String::from_utf8_lossy(haystack);
    assert!(
        !lossy.contains(&b64),
        "{} must not appear base64-encoded",
        what
    );
}

// ── 1. Envelope carries no readable payload ────────────────────────────────

#[test]
fn test_sealed_envelope_contains_no_plaintext() {
    let known = "KNOWN-PAYLOAD-abc123-MUST-NOT-APPEAR";
    let blob = envelope::seal(known.as_bytes(), "pw").expect("seal should succeed");
    assert_not_embedded(&blob, known.as_bytes(), "payload");
}

// ── 2. Key file text carries no key material ───────────────────────────────

#[test]
fn test_key_file_text_contains_no_private_key() {
    let text = record::generate_encrypted_key_string("pw", "leak probe")
        .expect("generate should succeed");
    let key_record =
        record::decode_encrypted_key_string(&text, "pw").expect("decode should succeed");

    let private_bytes = base64::engine::general_purpose::STANDARD
        .decode(&key_record.private_key)
        .expect("private key must be valid base64");

    assert_not_embedded(text.as_bytes(), &private_bytes, "private key");
    assert!(
        !text.contains(&key_record.private_key),
        "private key base64 string must not appear in the key file text"
    );
    assert!(
        !text.contains("leak probe"),
        "record name must not appear in the key file text"
    );
}

// ── 3. Token carries no readable payload ───────────────────────────────────

#[test]
fn test_token_contains_no_plaintext() {
    let known = "LICENSE-BLOB-xyz789-MUST-NOT-APPEAR";
    let uri = token::encrypt_to_uri(known, "pw").expect("encrypt_to_uri should succeed");
    assert_not_embedded(uri.as_bytes(), known.as_bytes(), "token payload");
}
