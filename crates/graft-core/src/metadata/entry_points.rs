//! Entry points exposed by each generated component.

use indexmap::IndexSet;

use super::RootMetadata;
use crate::names::TypeName;
use crate::well_known::{GENERATED_COMPONENT, TEST_SINGLETON_COMPONENT, is_singleton_component};

impl RootMetadata {
    /// Entry points of `component`: the user-declared ones, one framework
    /// marker, and the component itself.
    pub fn entry_points(&self, component: &TypeName) -> IndexSet<TypeName> {
        let mut entry_points = self.user_defined_entry_points(component);

        let marker = if self.root.is_test_root() && is_singleton_component(component) {
            &*TEST_SINGLETON_COMPONENT
        } else {
            &*GENERATED_COMPONENT
        };
        entry_points.insert(marker.clone());
        entry_points.insert(component.clone());
        entry_points
    }

    fn user_defined_entry_points(&self, component: &TypeName) -> IndexSet<TypeName> {
        if self.root.is_default_root() && !self.roots_using_default_components.is_empty() {
            // The shared tree serves every root using it.
            self.roots_using_default_components
                .iter()
                .flat_map(|metadata| metadata.entry_points(component))
                .collect()
        } else if self.root.is_default_root() && is_singleton_component(component) {
            // Early entry points can only be installed in the singleton component.
            self.deps.early_entry_points()
        } else {
            self.deps
                .entry_points(component, self.root.name(), self.root.is_test_root())
        }
    }
}
