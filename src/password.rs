//! Random password generation for `generate-key` when the operator
//! supplies no password of their own.

use rand::Rng;
use zeroize::Zeroizing;

/// Length of a generated password, in characters.
pub const DEFAULT_PASSWORD_LEN: usize = 32;

/// Alphanumeric plus a symbol set that survives shell quoting and
/// copy-paste; deliberately excludes quotes and backslash.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789\
                         !@#$%^&*()-_=+";

/// Draw `len` characters uniformly from the charset using the OS RNG.
///
/// The result is wrapped in `Zeroizing` — the generated password is key
/// material and is wiped when the caller drops it.
pub fn random_password(len: usize) -> Zeroizing<String> {
    let mut rng = rand::rngs::OsRng;
    let password: String = (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    Zeroizing::new(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_password_length() {
        assert_eq!(random_password(DEFAULT_PASSWORD_LEN).len(), 32);
        assert_eq!(random_password(1).len(), 1);
        assert_eq!(random_password(0).len(), 0);
    }

    #[test]
    fn test_random_password_charset() {
        let password = random_password(256);
        assert!(
            password.bytes().all(|b| CHARSET.contains(&b)),
            "every character must come from the charset"
        );
    }

    #[test]
    fn test_random_password_not_repeated() {
        let a = random_password(DEFAULT_PASSWORD_LEN);
        let b = random_password(DEFAULT_PASSWORD_LEN);
        assert_ne!(*a, *b, "two draws must differ");
    }
}
