//! # graft-config
//!
//! Options consumed by the graft root processor.
//!
//! The processor itself never parses build-tool arguments. It receives a
//! [`ProcessorOptions`] value, assembled here from defaults, an optional
//! `graft.toml` file and `GRAFT_`-prefixed environment variables.

pub mod discovery;
pub mod error;
pub mod logger;
pub mod options;
pub mod settings;

pub use discovery::{find_config, ConfigDiscovery, CONFIG_FILE_NAME};
pub use error::*;
pub use logger::{init_logger, init_logger_with_filter};
pub use options::*;
pub use settings::*;
