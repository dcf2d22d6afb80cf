//! Logging setup using the `tracing` ecosystem.
//!
//! Hosts embedding the processor call [`init_logger`] once before the first
//! round. The filter is chosen in this order:
//!
//! 1. `settings.log_level`
//! 2. `RUST_LOG`
//! 3. `graft=info` for the graft crates
//!
//! ```rust,no_run
//! use graft_config::{init_logger, GlobalSettings};
//!
//! init_logger(&GlobalSettings::default());
//! tracing::info!("processing roots");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::GlobalSettings;

const DEFAULT_FILTER: &str = "graft_core=info,graft_config=info";

/// Install the global subscriber. Returns `false` if one was already installed.
pub fn init_logger(settings: &GlobalSettings) -> bool {
    let filter = match settings.log_level.as_deref() {
        Some(level) => EnvFilter::new(expand_level(level)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    install(filter, settings.wants_full_format())
}

/// Install the global subscriber with an explicit filter directive.
pub fn init_logger_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), false)
}

fn install(filter: EnvFilter, full: bool) -> bool {
    let registry = tracing_subscriber::registry().with(filter);

    let result = if full {
        registry.with(fmt::layer().with_target(true)).try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_level(true).compact())
            .try_init()
    };

    result.is_ok()
}

/// A bare level such as `debug` applies to the graft crates only; anything
/// else is treated as a full directive.
fn expand_level(level: &str) -> String {
    let bare = matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    );
    if bare {
        format!("graft_core={level},graft_config={level}")
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_graft() {
        assert_eq!(expand_level("debug"), "graft_core=debug,graft_config=debug");
        assert_eq!(expand_level("graft_core=trace"), "graft_core=trace");
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        init_logger_with_filter("off");
        assert!(!init_logger(&GlobalSettings::default()));
    }
}
