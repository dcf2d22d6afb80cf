//! Component descriptors and the hierarchy they form.
//!
//! The tree is produced elsewhere; this module only checks that it really is a
//! tree and offers read-only queries over it.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names::TypeName;

/// A node in the component hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub component: TypeName,
    #[serde(default)]
    pub scopes: Vec<TypeName>,
    #[serde(default)]
    pub parent: Option<TypeName>,
}

impl ComponentDescriptor {
    pub fn new(component: TypeName) -> Self {
        Self {
            component,
            scopes: Vec::new(),
            parent: None,
        }
    }

    pub fn with_scope(mut self, scope: TypeName) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn with_parent(mut self, parent: TypeName) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn component(&self) -> &TypeName {
        &self.component
    }

    pub fn scopes(&self) -> &[TypeName] {
        &self.scopes
    }

    pub fn parent(&self) -> Option<&TypeName> {
        self.parent.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentTreeError {
    #[error("component {0} is declared more than once")]
    DuplicateComponent(TypeName),

    #[error("component {component} has parent {parent}, which is not part of the tree")]
    MissingParent { component: TypeName, parent: TypeName },

    #[error("component tree has no root component")]
    NoRoot,

    #[error("component tree must have exactly one root, found: {}", format_names(.0))]
    MultipleRoots(Vec<TypeName>),

    #[error("component graph has cycles through: {}", format_names(.0))]
    Cycle(Vec<TypeName>),
}

fn format_names(names: &[TypeName]) -> String {
    let joined = names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Immutable, validated component hierarchy.
#[derive(Debug, Clone)]
pub struct ComponentTree {
    descriptors: IndexMap<TypeName, ComponentDescriptor>,
    children: HashMap<TypeName, Vec<TypeName>>,
    root: TypeName,
}

impl ComponentTree {
    /// Validate `descriptors` and build the tree. Input order is preserved by
    /// [`ComponentTree::descriptors`].
    pub fn new(
        descriptors: impl IntoIterator<Item = ComponentDescriptor>,
    ) -> Result<Self, ComponentTreeError> {
        let mut by_name: IndexMap<TypeName, ComponentDescriptor> = IndexMap::new();
        for descriptor in descriptors {
            let name = descriptor.component.clone();
            if by_name.insert(name.clone(), descriptor).is_some() {
                return Err(ComponentTreeError::DuplicateComponent(name));
            }
        }

        let mut children: HashMap<TypeName, Vec<TypeName>> = HashMap::default();
        let mut roots = Vec::new();
        for descriptor in by_name.values() {
            match &descriptor.parent {
                Some(parent) if !by_name.contains_key(parent) => {
                    return Err(ComponentTreeError::MissingParent {
                        component: descriptor.component.clone(),
                        parent: parent.clone(),
                    });
                }
                Some(parent) => children
                    .entry(parent.clone())
                    .or_default()
                    .push(descriptor.component.clone()),
                None => roots.push(descriptor.component.clone()),
            }
        }

        let root = match roots.len() {
            0 if by_name.is_empty() => return Err(ComponentTreeError::NoRoot),
            // Every node has a parent, so they all sit on cycles.
            0 => return Err(ComponentTreeError::Cycle(by_name.keys().cloned().collect())),
            1 => roots.remove(0),
            _ => return Err(ComponentTreeError::MultipleRoots(roots)),
        };

        // With one root and all parents present, anything unreachable from the
        // root hangs off a cycle.
        let mut seen: HashSet<&TypeName> = HashSet::default();
        let mut queue = VecDeque::from([&root]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            if let Some(kids) = children.get(current) {
                queue.extend(kids.iter());
            }
        }
        if seen.len() != by_name.len() {
            let unreachable = by_name
                .keys()
                .filter(|name| !seen.contains(name))
                .cloned()
                .collect();
            return Err(ComponentTreeError::Cycle(unreachable));
        }

        Ok(Self {
            descriptors: by_name,
            children,
            root,
        })
    }

    /// All descriptors in the order they were supplied.
    pub fn descriptors(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn root(&self) -> &ComponentDescriptor {
        &self.descriptors[&self.root]
    }

    pub fn get(&self, component: &TypeName) -> Option<&ComponentDescriptor> {
        self.descriptors.get(component)
    }

    pub fn contains(&self, component: &TypeName) -> bool {
        self.descriptors.contains_key(component)
    }

    pub fn parent_of(&self, component: &TypeName) -> Option<&ComponentDescriptor> {
        self.get(component)
            .and_then(ComponentDescriptor::parent)
            .and_then(|parent| self.get(parent))
    }

    pub fn children_of(&self, component: &TypeName) -> &[TypeName] {
        self.children
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every scope declared anywhere in the tree, first occurrence first.
    pub fn all_scopes(&self) -> IndexSet<TypeName> {
        self.descriptors()
            .flat_map(|descriptor| descriptor.scopes.iter().cloned())
            .collect()
    }
}
