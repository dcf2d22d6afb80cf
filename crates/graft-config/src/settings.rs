//! Global settings shared by every processing round.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// `tracing` filter directive, e.g. `debug` or `graft_core=trace`.
    #[serde(default)]
    pub log_level: Option<String>,

    /// `compact` (default) or `full`.
    #[serde(default)]
    pub log_format: Option<String>,
}

impl GlobalSettings {
    /// Whether the full (multi-field) log format was requested.
    pub fn wants_full_format(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|format| format.eq_ignore_ascii_case("full"))
    }
}
