//! Constraints across all roots of a compilation unit, and against the roots
//! recorded by earlier units.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::env::ProcessingEnv;
use crate::names::TypeName;
use crate::root::{Root, RootKind};

/// Roots processed by previous compilation units, as recorded by them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousRoots {
    #[serde(default)]
    pub app_roots: Vec<TypeName>,
    #[serde(default)]
    pub test_roots: Vec<TypeName>,
}

impl PreviousRoots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_root(mut self, root: TypeName) -> Self {
        self.app_roots.push(root);
        self
    }

    pub fn with_test_root(mut self, root: TypeName) -> Self {
        self.test_roots.push(root);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.app_roots.is_empty() && self.test_roots.is_empty()
    }

    pub fn contains(&self, root: &TypeName) -> bool {
        self.app_roots.contains(root) || self.test_roots.contains(root)
    }

    /// The snapshot a later unit should see once `roots` have been processed.
    pub fn recording(&self, roots: &[Root]) -> Self {
        let mut next = self.clone();
        for root in roots.iter().filter(|root| !self.contains(root.name())) {
            if root.is_application_root() {
                next.app_roots.push(root.name().clone());
            } else if root.kind() == RootKind::Test {
                next.test_roots.push(root.name().clone());
            }
        }
        next
    }
}

/// Check `roots` against each other and against `previous`, reporting every
/// violation found. Returns the number of errors reported.
///
/// The default root is synthetic and never takes part. Roots already recorded
/// in `previous` are being reprocessed, not added, so they only count towards
/// the checks within this unit.
pub fn validate_root_set(roots: &[Root], previous: &PreviousRoots, env: &ProcessingEnv) -> usize {
    let app_roots: Vec<&TypeName> = roots
        .iter()
        .filter(|root| root.is_application_root())
        .map(Root::name)
        .collect();
    let test_roots: Vec<&TypeName> = roots
        .iter()
        .filter(|root| root.is_test_root() && !root.is_default_root())
        .map(Root::name)
        .collect();

    let mut messages = Vec::new();

    if !app_roots.is_empty() && !test_roots.is_empty() {
        messages.push(format!(
            "Cannot process test roots and app roots in the same compilation unit:\
             \n  \tApp root in this compilation unit: {}\
             \n  \tTest roots in this compilation unit: {}",
            list(&app_roots),
            list(&test_roots),
        ));
    }

    if app_roots.len() > 1 {
        messages.push(format!(
            "Cannot process multiple app roots in the same compilation unit: {}",
            list(&app_roots),
        ));
    }

    if env.options().disable_cross_compilation_root_validation {
        tracing::debug!("Skipping validation against roots from previous compilation units");
    } else {
        let new_roots: Vec<&TypeName> = app_roots
            .iter()
            .chain(&test_roots)
            .copied()
            .filter(|name| !previous.contains(name))
            .collect();
        let new_app_roots: Vec<&TypeName> = app_roots
            .iter()
            .copied()
            .filter(|name| !previous.contains(name))
            .collect();

        if !previous.test_roots.is_empty() && !new_roots.is_empty() {
            messages.push(format!(
                "Cannot process new roots when there are test roots from a previous \
                 compilation unit:\
                 \n  \tTest roots from previous compilation unit: {}\
                 \n  \tAll roots from this compilation unit: {}",
                list(&previous.test_roots),
                list(&new_roots),
            ));
        }

        if !previous.app_roots.is_empty() && !new_app_roots.is_empty() {
            messages.push(format!(
                "Cannot process app roots in this compilation unit since there are app roots \
                 in a previous compilation unit:\
                 \n  \tApp roots in previous compilation unit: {}\
                 \n  \tApp roots in this compilation unit: {}",
                list(&previous.app_roots),
                list(&new_app_roots),
            ));
        }
    }

    tracing::debug!(
        app_roots = app_roots.len(),
        test_roots = test_roots.len(),
        previous_app_roots = previous.app_roots.len(),
        previous_test_roots = previous.test_roots.len(),
        errors = messages.len(),
        "Validated root set"
    );

    let errors = messages.len();
    for message in messages {
        env.report_error(message, None);
    }
    errors
}

fn list<T: Display>(names: &[T]) -> String {
    let joined = names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
