use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::error::SmkmError;

pub fn key_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SmkmError::HomeDirNotFound)?;
    Ok(home.join(".smkm"))
}

pub fn key_file_path() -> anyhow::Result<PathBuf> {
    Ok(key_dir()?.join("smkey.raw"))
}

pub fn ensure_key_dir() -> anyhow::Result<()> {
    let dir = key_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory", dir.display()))?;
    Ok(())
}

pub fn key_file_exists() -> anyhow::Result<bool> {
    let path = key_file_path()?;
    Ok(path.exists())
}

/// Write the encrypted key text to disk atomically (write to temp then
/// rename) and set 0600 permissions.
///
/// Uses a temp file in the same directory to ensure atomic replacement on
/// POSIX systems. The content is already an opaque envelope, but the file
/// is still restricted to the owner: the envelope's only protection is the
/// password, and there is no reason to hand other users an offline
/// brute-force target.
pub fn write_key_text_atomic(text: &str, dest: &Path) -> anyhow::Result<()> {
    let parent = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Key destination path has no parent directory"))?;

    let tmp = parent.join(".smkey.raw.tmp");

    std::fs::write(&tmp, text).map_err(SmkmError::AtomicWriteFailed)?;

    if let Err(e) = std::fs::rename(&tmp, dest) {
        // Attempt cleanup of temp file on rename failure
        let _ = std::fs::remove_file(&tmp);
        return Err(SmkmError::AtomicWriteFailed(e).into());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(dest, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to set 0600 permissions on {}", dest.display()))?;
    }

    Ok(())
}

/// Read the encrypted key text from the default path.
pub fn read_key_text() -> anyhow::Result<String> {
    let path = key_file_path()?;
    if !path.exists() {
        return Err(SmkmError::NoKeyFile.into());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read key file at {}", path.display()))?;
    Ok(content.trim().to_string())
}

pub fn remove_key_file() -> anyhow::Result<()> {
    let path = key_file_path()?;
    if !path.exists() {
        return Err(SmkmError::NoKeyFile.into());
    }
    std::fs::remove_file(&path)
        .with_context(|| format!("Failed to remove key file at {}", path.display()))?;
    Ok(())
}
