//! Per-root metadata driving component generation.
//!
//! A [`RootMetadata`] answers, for every component of one root's tree, which
//! modules are installed, which entry points are exposed and which scopes
//! apply. It is validated once when created: problems in user code are
//! reported to the environment's sink and the value is still returned.
//!
//! Methods are split by concern, the same way as for the graph types:
//!
//! - `entry_points` - entry-point sets and default-root defaulting
//! - `scopes` - alias-expanded scopes per component
//! - `validation` - module constructibility checks
//! - `test_root` - metadata specific to test roots

mod entry_points;
mod scopes;
mod test_root;
mod validation;

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use once_cell::unsync::OnceCell;

use crate::component::ComponentTree;
use crate::constructibility::can_auto_construct;
use crate::decl::ModuleDecl;
use crate::deps::ComponentDependencies;
use crate::env::ProcessingEnv;
use crate::error::MetadataError;
use crate::names::TypeName;
use crate::root::{Root, RootKind};
use crate::well_known::APPLICATION_CONTEXT_MODULE;

pub use test_root::TestRootMetadata;

/// Metadata for one root. Immutable once created; the two derived values are
/// computed on first use and kept for the lifetime of the instance.
pub struct RootMetadata {
    root: Root,
    env: Arc<ProcessingEnv>,
    component_tree: Arc<ComponentTree>,
    deps: Arc<dyn ComponentDependencies>,
    roots_using_default_components: Vec<RootMetadata>,
    scopes_by_component: OnceCell<IndexMap<TypeName, IndexSet<TypeName>>>,
    test_root_metadata: OnceCell<TestRootMetadata>,
}

impl RootMetadata {
    /// Create and validate metadata for `root`.
    pub fn create(
        root: Root,
        component_tree: Arc<ComponentTree>,
        deps: Arc<dyn ComponentDependencies>,
        env: Arc<ProcessingEnv>,
    ) -> Self {
        Self::create_internal(root, Vec::new(), component_tree, deps, env)
    }

    /// Create metadata for the default root, hosting the components of
    /// `roots_using_default_components`.
    ///
    /// # Errors
    ///
    /// `MetadataError::InvalidCall` if `root` is not the default root.
    pub fn create_for_default_root(
        root: Root,
        roots_using_default_components: Vec<RootMetadata>,
        component_tree: Arc<ComponentTree>,
        deps: Arc<dyn ComponentDependencies>,
        env: Arc<ProcessingEnv>,
    ) -> Result<Self, MetadataError> {
        if !root.is_default_root() {
            return Err(MetadataError::invalid_call(
                "create_for_default_root",
                format!("{} is a {}, not the default root", root.name(), root.kind()),
            ));
        }
        Ok(Self::create_internal(
            root,
            roots_using_default_components,
            component_tree,
            deps,
            env,
        ))
    }

    /// Rebuild this metadata over a replacement tree. The result is a fresh,
    /// revalidated instance; nothing computed for the old tree carries over.
    pub fn copy_with_new_tree(self, component_tree: Arc<ComponentTree>) -> Self {
        Self::create_internal(
            self.root,
            self.roots_using_default_components,
            component_tree,
            self.deps,
            self.env,
        )
    }

    fn create_internal(
        root: Root,
        roots_using_default_components: Vec<RootMetadata>,
        component_tree: Arc<ComponentTree>,
        deps: Arc<dyn ComponentDependencies>,
        env: Arc<ProcessingEnv>,
    ) -> Self {
        let metadata = Self {
            root,
            env,
            component_tree,
            deps,
            roots_using_default_components,
            scopes_by_component: OnceCell::new(),
            test_root_metadata: OnceCell::new(),
        };
        let errors = metadata.validate();
        tracing::debug!(
            root = %metadata.root.name(),
            kind = %metadata.root.kind(),
            components = metadata.component_tree.len(),
            errors,
            "Created root metadata"
        );
        metadata
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn component_tree(&self) -> &ComponentTree {
        &self.component_tree
    }

    pub fn deps(&self) -> &dyn ComponentDependencies {
        self.deps.as_ref()
    }

    /// Roots whose components are generated as part of this default root's tree.
    pub fn roots_using_default_components(&self) -> &[RootMetadata] {
        &self.roots_using_default_components
    }

    /// Modules installed in `component` for this root.
    pub fn modules(&self, component: &TypeName) -> IndexSet<Arc<ModuleDecl>> {
        self.deps
            .modules(component, self.root.name(), self.root.is_test_root())
    }

    /// Returns `true` if this is a test root that provides no test-specific
    /// dependencies, so its components can be the default root's.
    pub fn can_share_components(&self) -> bool {
        self.env.options().share_test_components
            && self.root.kind() == RootKind::Test
            && !self.deps.includes_test_deps(self.root.name())
    }

    /// Modules in `component` the framework cannot instantiate by itself.
    ///
    /// An inner (non-static nested) module counts as such, since an instance of
    /// its enclosing type would be needed. The application-context module is
    /// skipped because generated code always supplies it.
    pub fn modules_that_cannot_be_auto_constructed(
        &self,
        component: &TypeName,
    ) -> IndexSet<Arc<ModuleDecl>> {
        self.modules(component)
            .into_iter()
            .filter(|module| module.name != *APPLICATION_CONTEXT_MODULE)
            .filter(|module| !can_auto_construct(module, self.env.kotlin()))
            .collect()
    }

    /// Always `false`: components never wait for bind values to be set.
    pub fn wait_for_bind_value(&self) -> bool {
        false
    }
}

impl fmt::Debug for RootMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootMetadata")
            .field("root", &self.root)
            .field("components", &self.component_tree.len())
            .field(
                "roots_using_default_components",
                &self
                    .roots_using_default_components
                    .iter()
                    .map(|metadata| metadata.root.name())
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
