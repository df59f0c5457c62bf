/// Encode command — wraps plaintext into an smkm:// token.
use owo_colors::{OwoColorize, Stream::Stderr};

use crate::cli::EncodeArgs;
use crate::keys::store;
use crate::{record, token};

/// Produce an `smkm://` token for `--data`.
///
/// Requires the key file to exist and the password to decode it: the token
/// is sealed under the same password as the key file, and proving the
/// password up front catches typos before a token sealed under a typo'd
/// password goes out the door.
pub fn run_encode(args: EncodeArgs) -> anyhow::Result<()> {
    // ── 1. Read the key file ─────────────────────────────────────────────
    let key_text = store::read_key_text()?;

    // ── 2. Resolve and verify the password ───────────────────────────────
    let password = super::password_or_prompt(args.password, "Key file password")?;
    if let Err(e) = record::decode_encrypted_key_string(&key_text, &password) {
        eprintln!(
            "{} {}",
            "[ERROR]".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }

    // ── 3. Seal the data and print the token ─────────────────────────────
    let uri = token::encrypt_to_uri(&args.data, &password)?;
    println!("{uri}");

    Ok(())
}
