//! Aggregated dependencies: which modules and entry points apply to a component
//! for a given root.
//!
//! Declarations are collected across many sources before a round starts. The
//! root processor only ever sees the finished snapshot through
//! [`ComponentDependencies`].

use std::hash::Hash;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::decl::ModuleDecl;
use crate::names::TypeName;

/// Read-only query interface over aggregated dependencies.
///
/// Every method is a pure function of its arguments.
pub trait ComponentDependencies {
    /// Modules installed in `component` for `root`.
    fn modules(
        &self,
        component: &TypeName,
        root: &TypeName,
        is_test_root: bool,
    ) -> IndexSet<Arc<ModuleDecl>>;

    /// Entry points installed in `component` for `root`.
    fn entry_points(
        &self,
        component: &TypeName,
        root: &TypeName,
        is_test_root: bool,
    ) -> IndexSet<TypeName>;

    /// Entry points that must be reachable before any particular root is known.
    fn early_entry_points(&self) -> IndexSet<TypeName>;

    /// Whether the test `root` contributes dependencies of its own
    /// (test-local installs or uninstalled modules).
    fn includes_test_deps(&self, root: &TypeName) -> bool;
}

/// Items of one kind keyed the way installs are declared.
#[derive(Debug, Clone)]
struct Installs<T> {
    global: IndexMap<TypeName, IndexSet<T>>,
    global_test: IndexMap<TypeName, IndexSet<T>>,
    per_test: IndexMap<(TypeName, TypeName), IndexSet<T>>,
}

impl<T> Default for Installs<T> {
    fn default() -> Self {
        Self {
            global: IndexMap::new(),
            global_test: IndexMap::new(),
            per_test: IndexMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Installs<T> {
    fn get(
        &self,
        component: &TypeName,
        root: &TypeName,
        is_test_root: bool,
        keep_global: impl Fn(&T) -> bool,
    ) -> IndexSet<T> {
        let global = self.global.get(component).into_iter().flatten();
        if !is_test_root {
            return global.cloned().collect();
        }

        let global_test = self.global_test.get(component).into_iter().flatten();
        let per_test = self
            .per_test
            .get(&(component.clone(), root.clone()))
            .into_iter()
            .flatten();

        global
            .filter(|item| keep_global(*item))
            .chain(global_test)
            .chain(per_test)
            .cloned()
            .collect()
    }

    fn has_test_installs(&self, root: &TypeName) -> bool {
        self.per_test
            .iter()
            .any(|((_, test_root), items)| test_root == root && !items.is_empty())
    }
}

/// In-memory snapshot of aggregated modules and entry points.
#[derive(Debug, Clone, Default)]
pub struct AggregatedDeps {
    modules: Installs<Arc<ModuleDecl>>,
    entry_points: Installs<TypeName>,
    early_entry_points: IndexSet<TypeName>,
    /// Globally installed modules replaced for every test root.
    replaced_in_tests: HashSet<TypeName>,
    /// Modules a specific test root uninstalls.
    uninstalled: HashMap<TypeName, HashSet<TypeName>>,
}

impl AggregatedDeps {
    pub fn builder() -> AggregatedDepsBuilder {
        AggregatedDepsBuilder {
            deps: Self::default(),
        }
    }
}

impl ComponentDependencies for AggregatedDeps {
    fn modules(
        &self,
        component: &TypeName,
        root: &TypeName,
        is_test_root: bool,
    ) -> IndexSet<Arc<ModuleDecl>> {
        let uninstalled = self.uninstalled.get(root);
        self.modules.get(component, root, is_test_root, |module| {
            !self.replaced_in_tests.contains(&module.name)
                && !uninstalled.is_some_and(|names| names.contains(&module.name))
        })
    }

    fn entry_points(
        &self,
        component: &TypeName,
        root: &TypeName,
        is_test_root: bool,
    ) -> IndexSet<TypeName> {
        self.entry_points
            .get(component, root, is_test_root, |_| true)
    }

    fn early_entry_points(&self) -> IndexSet<TypeName> {
        self.early_entry_points.clone()
    }

    fn includes_test_deps(&self, root: &TypeName) -> bool {
        self.modules.has_test_installs(root)
            || self.entry_points.has_test_installs(root)
            || self.uninstalled.get(root).is_some_and(|names| !names.is_empty())
    }
}

pub struct AggregatedDepsBuilder {
    deps: AggregatedDeps,
}

impl AggregatedDepsBuilder {
    /// Install a module in `component` for every root.
    pub fn install_module(mut self, component: TypeName, module: impl Into<Arc<ModuleDecl>>) -> Self {
        self.deps
            .modules
            .global
            .entry(component)
            .or_default()
            .insert(module.into());
        self
    }

    /// Install a module in `component` for every test root.
    pub fn install_test_module(
        mut self,
        component: TypeName,
        module: impl Into<Arc<ModuleDecl>>,
    ) -> Self {
        self.deps
            .modules
            .global_test
            .entry(component)
            .or_default()
            .insert(module.into());
        self
    }

    /// Install a module in `component` for a single test root.
    pub fn install_module_for_test(
        mut self,
        component: TypeName,
        root: TypeName,
        module: impl Into<Arc<ModuleDecl>>,
    ) -> Self {
        self.deps
            .modules
            .per_test
            .entry((component, root))
            .or_default()
            .insert(module.into());
        self
    }

    /// Drop a globally installed module from every test root.
    pub fn replace_in_tests(mut self, module: TypeName) -> Self {
        self.deps.replaced_in_tests.insert(module);
        self
    }

    /// Drop a globally installed module from one test root.
    pub fn uninstall_for_test(mut self, root: TypeName, module: TypeName) -> Self {
        self.deps.uninstalled.entry(root).or_default().insert(module);
        self
    }

    pub fn install_entry_point(mut self, component: TypeName, entry_point: TypeName) -> Self {
        self.deps
            .entry_points
            .global
            .entry(component)
            .or_default()
            .insert(entry_point);
        self
    }

    pub fn install_test_entry_point(mut self, component: TypeName, entry_point: TypeName) -> Self {
        self.deps
            .entry_points
            .global_test
            .entry(component)
            .or_default()
            .insert(entry_point);
        self
    }

    pub fn install_entry_point_for_test(
        mut self,
        component: TypeName,
        root: TypeName,
        entry_point: TypeName,
    ) -> Self {
        self.deps
            .entry_points
            .per_test
            .entry((component, root))
            .or_default()
            .insert(entry_point);
        self
    }

    pub fn install_early_entry_point(mut self, entry_point: TypeName) -> Self {
        self.deps.early_entry_points.insert(entry_point);
        self
    }

    pub fn build(self) -> AggregatedDeps {
        self.deps
    }
}
