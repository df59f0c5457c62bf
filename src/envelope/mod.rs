//! Password-derived envelope: seal/open of versioned, salted, authenticated
//! ciphertext blobs.
//!
//! The key is derived from the password with Argon2id + HKDF-SHA256; the
//! payload is encrypted with XChaCha20-Poly1305 using the fixed envelope
//! header as associated data, so any mutation of the header, salt, nonce,
//! ciphertext, or tag makes `open` fail instead of decrypting wrong data.
//! Key boundaries are `Zeroizing<[u8; 32]>` so derived key material is wiped
//! as soon as a call returns.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::Engine;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};
use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::EnvelopeError;

/// Magic bytes identifying the SMKM envelope format.
pub const MAGIC: &[u8; 4] = b"SMKM";

/// Current envelope format version. Bumped whenever the KDF, cipher, or
/// layout changes; `open` reads the version from the blob, never from here.
pub const VERSION: u8 = 0x01;

/// Fixed header length: 4 magic + 1 version + 4 m_cost + 4 t_cost +
/// 4 p_cost + 32 salt + 24 nonce = 73 bytes.
pub const HEADER_LEN: usize = 73;

/// Poly1305 tag appended to the ciphertext by the AEAD.
pub const TAG_LEN: usize = 16;

const SALT_LEN: usize = 32;
const NONCE_LEN: usize = 24;

/// HKDF info string domain-separating envelope keys from any other use of
/// the same password.
const HKDF_INFO: &[u8] = b"smkm-env-v1";

/// Default Argon2id memory cost (64 MiB) — stored in the header on seal.
const KDF_M_COST: u32 = 65536;

/// Default Argon2id iteration count — stored in the header on seal.
const KDF_T_COST: u32 = 3;

/// Default Argon2id parallelism — stored in the header on seal.
const KDF_P_COST: u32 = 1;

/// Derive a 32-byte envelope key from a password and salt using
/// Argon2id + HKDF-SHA256.
///
/// Argon2 parameters come in as arguments so that `open` can pass the
/// values decoded from the envelope header, keeping old blobs readable
/// after a cost upgrade. Deterministic: same password + salt + params
/// always yields the same key.
fn derive_key(
    password: &str,
    salt: &[u8; SALT_LEN],
    m_cost: u32,
    t_cost: u32,
    p_cost: u32,
) -> Result<Zeroizing<[u8; 32]>, EnvelopeError> {
    let params = Params::new(m_cost, t_cost, p_cost, Some(32))
        .map_err(|_| EnvelopeError::Malformed("invalid key derivation parameters"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut argon2_output = Zeroizing::new([0u8; 32]);
    argon2
        .hash_password_into(password.as_bytes(), salt, argon2_output.as_mut())
        .map_err(|_| EnvelopeError::Malformed("key derivation failed"))?;

    let hkdf = Hkdf::<Sha256>::new(None, &*argon2_output);
    let mut okm = Zeroizing::new([0u8; 32]);
    hkdf.expand(HKDF_INFO, okm.as_mut())
        .map_err(|_| EnvelopeError::Malformed("key expansion failed"))?;

    Ok(okm)
}

/// Serialize the fixed header. These bytes double as the AEAD associated
/// data, binding version and KDF parameters into the authentication tag.
fn encode_header(
    m_cost: u32,
    t_cost: u32,
    p_cost: u32,
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Vec<u8> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    header.extend_from_slice(MAGIC);
    header.push(VERSION);
    header.extend_from_slice(&m_cost.to_be_bytes());
    header.extend_from_slice(&t_cost.to_be_bytes());
    header.extend_from_slice(&p_cost.to_be_bytes());
    header.extend_from_slice(salt);
    header.extend_from_slice(nonce);
    header
}

/// Seal plaintext under a password-derived key.
///
/// Draws a fresh random salt and nonce on every call, so sealing the same
/// `(plaintext, password)` twice yields two different blobs that both open
/// to the same plaintext. Returns the complete binary envelope:
///
/// ```text
/// Offset  Size  Field
/// 0       4     Magic: b"SMKM"
/// 4       1     Version: 0x01
/// 5       4     m_cost (Argon2, u32 big-endian)
/// 9       4     t_cost (Argon2, u32 big-endian)
/// 13      4     p_cost (Argon2, u32 big-endian)
/// 17      32    Salt (random bytes)
/// 49      24    Nonce (random bytes)
/// 73      N     XChaCha20-Poly1305 ciphertext + 16-byte tag
/// ```
pub fn seal(plaintext: &[u8], password: &str) -> anyhow::Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce);

    let header = encode_header(KDF_M_COST, KDF_T_COST, KDF_P_COST, &salt, &nonce);

    let key = derive_key(password, &salt, KDF_M_COST, KDF_T_COST, KDF_P_COST)
        .map_err(|e| anyhow::anyhow!("key derivation error: {}", e))?;

    let cipher = XChaCha20Poly1305::new_from_slice(&*key)
        .map_err(|e| anyhow::anyhow!("cipher init error: {}", e))?;
    let ciphertext = cipher
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(|e| anyhow::anyhow!("encryption error: {}", e))?;

    let mut envelope = header;
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Open a sealed envelope with the password it was sealed under.
///
/// Validates the magic and version, decodes the Argon2 parameters from the
/// header (NOT from the current defaults — older blobs stay readable after
/// a parameter upgrade), re-derives the key, and decrypts. A wrong password
/// and a tampered blob both surface as `EnvelopeError::Authentication`;
/// structural problems (truncation, wrong magic, unknown version) surface
/// as `Malformed` / `UnsupportedVersion`. Never returns partial plaintext.
pub fn open(envelope: &[u8], password: &str) -> Result<Vec<u8>, EnvelopeError> {
    if envelope.len() < HEADER_LEN + TAG_LEN {
        return Err(EnvelopeError::Malformed("truncated"));
    }
    if &envelope[..4] != MAGIC {
        return Err(EnvelopeError::Malformed("wrong magic bytes"));
    }
    if envelope[4] != VERSION {
        return Err(EnvelopeError::UnsupportedVersion(envelope[4]));
    }

    // Length check above guarantees these slices exist.
    let m_cost = u32::from_be_bytes(envelope[5..9].try_into().unwrap());
    let t_cost = u32::from_be_bytes(envelope[9..13].try_into().unwrap());
    let p_cost = u32::from_be_bytes(envelope[13..17].try_into().unwrap());
    let salt: [u8; SALT_LEN] = envelope[17..49].try_into().unwrap();
    let nonce: [u8; NONCE_LEN] = envelope[49..73].try_into().unwrap();

    let header = &envelope[..HEADER_LEN];
    let ciphertext = &envelope[HEADER_LEN..];

    let key = derive_key(password, &salt, m_cost, t_cost, p_cost)?;

    let cipher = XChaCha20Poly1305::new_from_slice(&*key)
        .map_err(|_| EnvelopeError::Malformed("invalid key derivation parameters"))?;
    cipher
        .decrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: ciphertext,
                aad: header,
            },
        )
        .map_err(|_| EnvelopeError::Authentication)
}

/// Seal plaintext and render the envelope as a single line of
/// URL-safe base64 (no padding), suitable for a flat text file or a URI
/// path component.
pub fn seal_to_text(plaintext: &[u8], password: &str) -> anyhow::Result<String> {
    let envelope = seal(plaintext, password)?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(envelope))
}

/// Parse the text form produced by `seal_to_text` and open it.
pub fn open_from_text(text: &str, password: &str) -> Result<Vec<u8>, EnvelopeError> {
    let envelope = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(text.trim())
        .map_err(|_| EnvelopeError::Malformed("not valid base64"))?;
    open(&envelope, password)
}
