//! User-facing findings, reported through a sink instead of returned.
//!
//! A processing round keeps going after a finding so that everything wrong
//! with a compilation unit is reported together.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::names::TypeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Declaration the finding is attached to; `None` for the whole compilation unit.
    pub element: Option<TypeName>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, element: Option<TypeName>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            element,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}: {} ({})", self.severity, self.message, element),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Receives diagnostics. Reporting never fails and never stops processing.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.is_error())
            .cloned()
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.lock().iter().filter(|d| d.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Remove and return everything reported so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!(
            severity = %diagnostic.severity,
            element = ?diagnostic.element.as_ref().map(ToString::to_string),
            "{}",
            diagnostic.message
        );
        self.diagnostics.lock().push(diagnostic);
    }
}
