//! Key-file credential selector.
//!
//! Stands in for the host key-selection helper on the command line: the
//! selected key lives in a single file (by default `~/.matchsight/api_key`)
//! and selecting a key prompts for it with masked input.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Password};
use tracing::info;

use crate::error::{ConfigError, Result};
use crate::port::{ApiKey, KeySelector};

/// A [`KeySelector`] backed by a file on disk.
#[derive(Debug, Clone)]
pub struct KeyFileSelector {
    path: PathBuf,
}

impl KeyFileSelector {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `key` as the selected key, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the file cannot be written.
    pub fn store(&self, key: &str) -> Result<()> {
        let Some(key) = ApiKey::new(key) else {
            return Err(ConfigError::InvalidValue {
                field: "api_key",
                reason: "key cannot be empty".to_string(),
            }
            .into());
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = open_private(&self.path)?;
        file.write_all(key.expose().as_bytes())?;
        info!(path = %self.path.display(), "Stored API key");
        Ok(())
    }

    /// Remove the stored key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Open `path` for writing, owner-only from creation on unix.
///
/// A pre-existing file is narrowed to 0600 before anything is written.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl KeySelector for KeyFileSelector {
    fn name(&self) -> &'static str {
        "key_file"
    }

    fn has_selected_key(&self) -> Result<bool> {
        Ok(self.selected_key()?.is_some())
    }

    fn open_key_selection(&self) -> Result<()> {
        let key = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Gemini API key")
            .interact()?;
        self.store(&key)
    }

    fn selected_key(&self) -> Result<Option<ApiKey>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(ApiKey::new(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
