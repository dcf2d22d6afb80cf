//! Error types for graft-core operations.
//!
//! Problems in user code are diagnostics, not errors. The types here cover
//! malformed inputs and callers breaking an API contract.

use thiserror::Error;

use crate::component::ComponentTreeError;
use crate::names::TypeNameError;

/// A caller used an operation outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("invalid call to {operation}: {reason}")]
    InvalidCall {
        operation: &'static str,
        reason: String,
    },
}

impl MetadataError {
    pub(crate) fn invalid_call(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidCall {
            operation,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("invalid component tree: {0}")]
    ComponentTree(#[from] ComponentTreeError),

    #[error(transparent)]
    TypeName(#[from] TypeNameError),

    #[error(transparent)]
    Config(#[from] graft_config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
