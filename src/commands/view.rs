/// View command — decrypts the key file and prints the record fields.
use owo_colors::{OwoColorize, Stream::Stderr};

use crate::cli::ViewArgs;
use crate::keys::{fingerprint, store};
use crate::record;

/// Show the decrypted key file.
///
/// A wrong password or an unrecognized file are ordinary operator mistakes:
/// both print the decode message and exit 1, never a backtrace.
pub fn run_view(args: ViewArgs) -> anyhow::Result<()> {
    // ── 1. Read the key file ─────────────────────────────────────────────
    let key_text = store::read_key_text()?;

    // ── 2. Resolve the password ──────────────────────────────────────────
    let password = super::password_or_prompt(args.password, "Key file password")?;

    // ── 3. Decode and display ────────────────────────────────────────────
    match record::decode_encrypted_key_string(&key_text, &password) {
        Ok(key_record) => {
            println!("Name:        {}", key_record.name);
            println!("Fingerprint: {}", fingerprint::short_fingerprint(&key_record.hash_id));
            println!("HashId:      {}", key_record.hash_id);
            println!("PublicKey:   {}", key_record.public_key);
            println!("PrivateKey:  {}", key_record.private_key);
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "[ERROR]".if_supports_color(Stderr, |t| t.red()),
                e
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
