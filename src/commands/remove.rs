/// Remove-key command — deletes the key file after confirmation.
use std::io::IsTerminal;

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::cli::RemoveKeyArgs;
use crate::keys::store;

/// Delete the key file at the default path.
///
/// There is no backup and no way to regenerate the key pair, so the
/// confirmation defaults to "no".
pub fn run_remove_key(args: RemoveKeyArgs) -> anyhow::Result<()> {
    // ── 1. Nothing to do without a key file ──────────────────────────────
    if !store::key_file_exists()? {
        println!("No key file.");
        return Ok(());
    }

    // ── 2. Confirmation prompt ───────────────────────────────────────────
    let skip_confirm = args.force || !std::io::stdin().is_terminal();
    if !skip_confirm {
        let key_path = store::key_file_path()?;
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Remove key file at {}?", key_path.display()))
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // ── 3. Delete ────────────────────────────────────────────────────────
    store::remove_key_file()?;
    println!("{}", "Removed.".if_supports_color(Stdout, |t| t.green()));

    Ok(())
}
