/// Decode command — unwraps an smkm:// token back to plaintext.
use owo_colors::{OwoColorize, Stream::Stderr};

use crate::cli::DecodeArgs;
use crate::token;

/// Recover the plaintext from `--data`.
///
/// `try_decrypt_uri` collapses every failure into `None`, so the only
/// user-facing distinction is decoded vs. not; exit code 1 signals the
/// latter to scripts.
pub fn run_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let password = super::password_or_prompt(args.password, "Token password")?;

    match token::try_decrypt_uri(&args.data, &password) {
        Some(plaintext) => println!("{plaintext}"),
        None => {
            eprintln!(
                "{}",
                "Token did not decode (wrong password or malformed token)."
                    .if_supports_color(Stderr, |t| t.yellow())
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
