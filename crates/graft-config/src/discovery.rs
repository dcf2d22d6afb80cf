//! File-based option discovery.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::options::ProcessorOptions;

/// Conventional name of the options file.
pub const CONFIG_FILE_NAME: &str = "graft.toml";

/// Return `<root>/graft.toml` if it exists.
pub fn find_config(root: impl AsRef<Path>) -> Option<PathBuf> {
    let path = root.as_ref().join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Finds and loads processor options rooted at a directory.
///
/// # Example
///
/// ```no_run
/// use graft_config::ConfigDiscovery;
///
/// let options = ConfigDiscovery::new(".").load().unwrap();
/// assert!(options.share_test_components);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Location of the options file, if present.
    pub fn find(&self) -> Option<PathBuf> {
        find_config(&self.root)
    }

    /// Load options from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the directory has no `graft.toml`.
    pub fn load(&self) -> Result<ProcessorOptions> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            path: self.root.join(CONFIG_FILE_NAME),
        })?;
        ProcessorOptions::load(Some(&path))
    }

    /// Load options, falling back to defaults (plus environment) when no file exists.
    pub fn load_or_default(&self) -> Result<ProcessorOptions> {
        match self.find() {
            Some(path) => ProcessorOptions::load(Some(&path)),
            None => {
                tracing::debug!(
                    "No {} under {}, using defaults",
                    CONFIG_FILE_NAME,
                    self.root.display()
                );
                ProcessorOptions::from_layers(None)
            }
        }
    }
}
