//! Roots: the application or test entry points that drive component generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::TypeName;
use crate::well_known::DEFAULT_ROOT;

/// Which kind of entry point a root is. Exactly one applies to every root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootKind {
    /// An application entry point.
    Application,
    /// A test class.
    Test,
    /// The synthetic root hosting components shared between test roots.
    Default,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RootKind::Application => "app root",
            RootKind::Test => "test root",
            RootKind::Default => "default root",
        };
        f.write_str(label)
    }
}

/// A field on a test class whose value is bound into the test's components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindValueField {
    pub field: String,
    pub type_name: TypeName,
}

/// The declaration a root was discovered on.
///
/// Diagnostics about a root are attached to this element. Test-only facts
/// (bind values, skipped injection) travel with it so test metadata can be
/// derived without going back to the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceElement {
    pub name: TypeName,
    pub bind_values: Vec<BindValueField>,
    pub skip_test_injection: bool,
}

impl SourceElement {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            bind_values: Vec::new(),
            skip_test_injection: false,
        }
    }

    pub fn with_bind_value(mut self, field: impl Into<String>, type_name: TypeName) -> Self {
        self.bind_values.push(BindValueField {
            field: field.into(),
            type_name,
        });
        self
    }

    pub fn with_skip_test_injection(mut self, skip: bool) -> Self {
        self.skip_test_injection = skip;
        self
    }
}

impl From<TypeName> for SourceElement {
    fn from(name: TypeName) -> Self {
        Self::new(name)
    }
}

/// Identity of one application or test root. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    kind: RootKind,
    element: SourceElement,
}

impl Root {
    pub fn application(element: impl Into<SourceElement>) -> Self {
        Self {
            kind: RootKind::Application,
            element: element.into(),
        }
    }

    pub fn test(element: impl Into<SourceElement>) -> Self {
        Self {
            kind: RootKind::Test,
            element: element.into(),
        }
    }

    /// The synthetic root shared test components are generated for.
    pub fn default_root() -> Self {
        Self {
            kind: RootKind::Default,
            element: SourceElement::new(DEFAULT_ROOT.clone()),
        }
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }

    pub fn name(&self) -> &TypeName {
        &self.element.name
    }

    pub fn element(&self) -> &SourceElement {
        &self.element
    }

    /// True for test roots and for the default root, which stands in for
    /// tests and is queried with test-flavoured dependencies.
    pub fn is_test_root(&self) -> bool {
        matches!(self.kind, RootKind::Test | RootKind::Default)
    }

    pub fn is_default_root(&self) -> bool {
        self.kind == RootKind::Default
    }

    pub fn is_application_root(&self) -> bool {
        self.kind == RootKind::Application
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element.name)
    }
}
