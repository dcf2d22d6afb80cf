//! Alias-expanded scopes per component.

use indexmap::{IndexMap, IndexSet};

use super::RootMetadata;
use crate::alias::AliasOfs;
use crate::names::TypeName;

impl RootMetadata {
    /// Scopes of `component`: those it declares plus every alias of them.
    pub fn scopes(&self, component: &TypeName) -> IndexSet<TypeName> {
        self.scopes_by_component()
            .get(component)
            .cloned()
            .unwrap_or_default()
    }

    fn scopes_by_component(&self) -> &IndexMap<TypeName, IndexSet<TypeName>> {
        self.scopes_by_component
            .get_or_init(|| self.scopes_by_component_uncached())
    }

    fn scopes_by_component_uncached(&self) -> IndexMap<TypeName, IndexSet<TypeName>> {
        // Aliases resolve against this tree's scopes only: a shared default
        // tree may compose a different subset than another root's.
        let define_component_scopes = self.component_tree.all_scopes();
        let alias_ofs = AliasOfs::create(self.env.aliases(), &define_component_scopes);

        let mut scopes_by_component: IndexMap<TypeName, IndexSet<TypeName>> = IndexMap::new();
        for descriptor in self.component_tree.descriptors() {
            for scope in descriptor.scopes() {
                let scopes = scopes_by_component
                    .entry(descriptor.component().clone())
                    .or_default();
                scopes.insert(scope.clone());
                scopes.extend(alias_ofs.aliases_for(scope).cloned());
            }
        }

        tracing::debug!(
            root = %self.root.name(),
            scoped_components = scopes_by_component.len(),
            "Computed scopes by component"
        );
        scopes_by_component
    }
}
