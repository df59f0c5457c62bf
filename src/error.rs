use thiserror::Error;

/// Failures reported by `envelope::open`.
///
/// Wrong password and tampered ciphertext are deliberately collapsed into a
/// single `Authentication` variant: the AEAD tag check cannot tell them
/// apart, and reporting them identically leaks nothing about which field
/// was wrong.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("malformed envelope: {0}")]
    Malformed(&'static str),

    #[error("unsupported envelope version ({0})")]
    UnsupportedVersion(u8),

    #[error("wrong password or corrupted data")]
    Authentication,
}

/// Failures reported by `record::decode_encrypted_key_string`.
///
/// Both variants are ordinary operator mistakes (typo'd password, wrong
/// file pasted in) and are returned as values, never panics. The Display
/// strings are shown to the user verbatim.
#[derive(Error, Debug)]
pub enum KeyDecodeError {
    #[error("unrecognized key file format: {0}")]
    InvalidFormat(String),

    #[error("wrong password or corrupted key file")]
    WrongPasswordOrCorrupted,
}

/// Store/CLI-level faults around the key file itself.
#[derive(Error, Debug)]
pub enum SmkmError {
    #[error("No key file found. Run `smkm generate-key` first.")]
    NoKeyFile,

    #[error("Failed to write key file atomically")]
    AtomicWriteFailed(#[source] std::io::Error),

    #[error("Cannot determine home directory")]
    HomeDirNotFound,
}
