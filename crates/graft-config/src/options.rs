//! Processor options and their layered loading.
//!
//! Priority: environment variables > config file > defaults.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::discovery::CONFIG_FILE_NAME;
use crate::error::{ConfigError, Result};
use crate::settings::GlobalSettings;

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `GRAFT_SETTINGS__LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "GRAFT_";

/// Feature flags read by the root processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorOptions {
    /// Let test roots without test-specific dependencies reuse the components
    /// generated for the default root.
    #[serde(default = "default_share_test_components")]
    pub share_test_components: bool,

    /// Skip the checks against roots recorded by earlier compilation units.
    #[serde(default)]
    pub disable_cross_compilation_root_validation: bool,

    #[serde(default)]
    pub settings: GlobalSettings,
}

fn default_share_test_components() -> bool {
    true
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            share_test_components: default_share_test_components(),
            disable_cross_compilation_root_validation: false,
            settings: GlobalSettings::default(),
        }
    }
}

impl ProcessorOptions {
    /// Load options from defaults, a TOML file and the environment.
    ///
    /// When `config_path` is `None`, `graft.toml` in the current directory is
    /// used if it exists. An explicit path that does not exist is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                default_path.exists().then_some(default_path)
            }
        };

        Self::from_layers(config_file.as_deref())
    }

    /// Defaults, then `file` if given, then the environment.
    pub(crate) fn from_layers(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            tracing::debug!("Loading processor options from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::invalid("configuration", e))
    }

    /// Parse options from TOML source, filling gaps with defaults.
    ///
    /// Environment variables are not consulted.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()
            .map_err(|e| ConfigError::invalid("toml", e))
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ConfigError::invalid("toml", e))
    }

    /// Builder-style override for the sharing flag.
    pub fn with_share_test_components(mut self, enabled: bool) -> Self {
        self.share_test_components = enabled;
        self
    }

    /// Builder-style override for cross-compilation root validation.
    pub fn with_cross_compilation_root_validation(mut self, enabled: bool) -> Self {
        self.disable_cross_compilation_root_validation = !enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_sharing() {
        let options = ProcessorOptions::default();
        assert!(options.share_test_components);
        assert!(!options.disable_cross_compilation_root_validation);
        assert_eq!(options.settings, GlobalSettings::default());
    }

    #[test]
    fn from_toml_str_keeps_unspecified_defaults() {
        let options = ProcessorOptions::from_toml_str(
            r#"
disable_cross_compilation_root_validation = true
"#,
        )
        .unwrap();

        assert!(options.share_test_components);
        assert!(options.disable_cross_compilation_root_validation);
    }

    #[test]
    fn from_toml_str_rejects_wrong_types() {
        let err = ProcessorOptions::from_toml_str("share_test_components = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "toml"));
    }

    #[test]
    fn toml_round_trip() {
        let options = ProcessorOptions::default().with_share_test_components(false);
        let text = options.to_toml_string().unwrap();
        assert_eq!(ProcessorOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn builders_toggle_flags() {
        let options = ProcessorOptions::default()
            .with_share_test_components(false)
            .with_cross_compilation_root_validation(false);
        assert!(!options.share_test_components);
        assert!(options.disable_cross_compilation_root_validation);
    }
}
