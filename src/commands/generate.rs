/// Generate-key command — creates the encrypted key file at the default path.
use std::io::IsTerminal;

use anyhow::Context;
use owo_colors::{OwoColorize, Stream::Stdout};
use zeroize::Zeroizing;

use crate::cli::GenerateKeyArgs;
use crate::keys::store;
use crate::{password, record};

/// Create a fresh key file.
///
/// Generates a random 32-character password when `--password` is omitted
/// and prints it exactly once — it is never stored anywhere, and a lost
/// password means an unrecoverable key file.
pub fn run_generate_key(args: GenerateKeyArgs) -> anyhow::Result<()> {
    // ── 1. Ensure ~/.smkm/ exists ────────────────────────────────────────
    store::ensure_key_dir().context("Failed to create ~/.smkm/ directory")?;
    let key_path = store::key_file_path()?;

    // ── 2. Overwrite guard ───────────────────────────────────────────────
    if store::key_file_exists()? && !args.force {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("Key file already exists; use --force to overwrite in non-interactive mode");
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Key file already exists at {}. Overwrite?",
                key_path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // ── 3. Resolve the password ──────────────────────────────────────────
    let (password, generated) = match args.password {
        Some(pw) => (Zeroizing::new(pw), false),
        None => (
            password::random_password(password::DEFAULT_PASSWORD_LEN),
            true,
        ),
    };

    // ── 4. Generate the record and write atomically ──────────────────────
    let key_text = record::generate_encrypted_key_string(&password, &args.name)?;
    store::write_key_text_atomic(&key_text, &key_path).context("Failed to write key file")?;

    // ── 5. Success output ────────────────────────────────────────────────
    if generated {
        // Printed once; there is no way to recover it later.
        println!("Password: {}", &*password);
    }
    println!(
        "{}",
        "Key file generated.".if_supports_color(Stdout, |t| t.green())
    );
    println!("Key file: {}", key_path.display());

    Ok(())
}
