pub mod decode;
pub mod encode;
pub mod generate;
pub mod remove;
pub mod view;

use std::io::IsTerminal;
use zeroize::Zeroizing;

/// Take the password from the CLI flag, or prompt for it when stdin is a
/// terminal. Non-interactive invocations must pass `--password`.
pub(crate) fn password_or_prompt(
    arg: Option<String>,
    prompt: &str,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(password) = arg {
        return Ok(Zeroizing::new(password));
    }
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("No terminal to prompt on — pass --password in non-interactive mode");
    }
    let password = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Password prompt failed: {}", e))?;
    Ok(Zeroizing::new(password))
}
