//! Metadata specific to test roots.

use super::RootMetadata;
use crate::error::MetadataError;
use crate::names::TypeName;
use crate::root::{BindValueField, RootKind, SourceElement};

/// Names and flags generated code needs for one test class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRootMetadata {
    test_name: TypeName,
    app_name: TypeName,
    test_injector_name: TypeName,
    skip_test_injection: bool,
    bind_values: Vec<BindValueField>,
}

impl TestRootMetadata {
    pub fn of(element: &SourceElement) -> Self {
        Self {
            test_name: element.name.clone(),
            app_name: element.name.with_suffix("_Application"),
            test_injector_name: element.name.with_suffix("_GeneratedInjector"),
            skip_test_injection: element.skip_test_injection,
            bind_values: element.bind_values.clone(),
        }
    }

    pub fn test_name(&self) -> &TypeName {
        &self.test_name
    }

    /// Generated application class the test runs under.
    pub fn app_name(&self) -> &TypeName {
        &self.app_name
    }

    /// Generated entry point that injects the test instance.
    pub fn test_injector_name(&self) -> &TypeName {
        &self.test_injector_name
    }

    pub fn skip_test_injection(&self) -> bool {
        self.skip_test_injection
    }

    /// Fields whose values the test binds into its components.
    pub fn bind_values(&self) -> &[BindValueField] {
        &self.bind_values
    }

    pub fn has_bind_values(&self) -> bool {
        !self.bind_values.is_empty()
    }
}

impl RootMetadata {
    /// Test metadata for this root, computed on first access.
    ///
    /// # Errors
    ///
    /// `MetadataError::InvalidCall` unless this is a test root. The default
    /// root is synthetic and has no test class behind it.
    pub fn test_metadata(&self) -> Result<&TestRootMetadata, MetadataError> {
        match self.root.kind() {
            RootKind::Test => Ok(self
                .test_root_metadata
                .get_or_init(|| TestRootMetadata::of(self.root.element()))),
            RootKind::Default => Err(MetadataError::invalid_call(
                "test_metadata",
                "The default root does not have TestRootMetadata!",
            )),
            RootKind::Application => Err(MetadataError::invalid_call(
                "test_metadata",
                format!("{} is an app root and has no TestRootMetadata", self.root.name()),
            )),
        }
    }
}
