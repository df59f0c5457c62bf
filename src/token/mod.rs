//! Token module: the `smkm://` transport URI.
//!
//! Wraps an arbitrary short plaintext string into a password-protected
//! envelope rendered as a URI, independent of any key file. The password is
//! never part of the token; the holder supplies it out-of-band.

use crate::envelope;

/// Scheme marker prefixed to every token so downstream tooling can
/// recognize the type.
pub const SCHEME: &str = "smkm://";

/// Seal `plaintext` under `password` and render it as an `smkm://` URI.
///
/// Intended for short strings (license blobs, activation codes); no length
/// limit is imposed beyond what the cipher supports.
pub fn encrypt_to_uri(plaintext: &str, password: &str) -> anyhow::Result<String> {
    let body = envelope::seal_to_text(plaintext.as_bytes(), password)?;
    Ok(format!("{SCHEME}{body}"))
}

/// Try to recover the plaintext from an `smkm://` token.
///
/// Every failure — missing scheme, invalid base64, malformed envelope,
/// wrong password, tampered data, non-UTF-8 payload — collapses into
/// `None`. Callers here want boolean-style input validation, not a
/// diagnostic; use the record codec when messages matter.
pub fn try_decrypt_uri(token: &str, password: &str) -> Option<String> {
    let body = token.trim().strip_prefix(SCHEME)?;
    let plaintext = envelope::open_from_text(body, password).ok()?;
    String::from_utf8(plaintext).ok()
}
