//! Scope aliases: scopes declaring that their bindings are visible wherever
//! another scope's are.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::names::TypeName;

/// One declaration of `alias` being an alias of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasDeclaration {
    pub alias: TypeName,
    pub target: TypeName,
}

impl AliasDeclaration {
    pub fn new(alias: TypeName, target: TypeName) -> Self {
        Self { alias, target }
    }
}

/// Where alias declarations come from.
pub trait AliasSource {
    fn alias_declarations(&self) -> Vec<AliasDeclaration>;
}

impl AliasSource for Vec<AliasDeclaration> {
    fn alias_declarations(&self) -> Vec<AliasDeclaration> {
        self.clone()
    }
}

/// Directed "is alias of" relation restricted to one scope universe.
#[derive(Debug, Clone, Default)]
pub struct AliasOfs {
    aliases_by_target: IndexMap<TypeName, IndexSet<TypeName>>,
}

impl AliasOfs {
    /// Resolve aliases against `scopes`, the scopes declared on the components
    /// of one tree. Declarations targeting a scope outside it are ignored, since
    /// a different root's tree may well contain that target.
    pub fn create(source: &dyn AliasSource, scopes: &IndexSet<TypeName>) -> Self {
        let mut aliases_by_target: IndexMap<TypeName, IndexSet<TypeName>> = IndexMap::new();
        for declaration in source.alias_declarations() {
            if !scopes.contains(&declaration.target) {
                tracing::trace!(
                    alias = %declaration.alias,
                    target = %declaration.target,
                    "Ignoring alias of a scope outside this component tree"
                );
                continue;
            }
            aliases_by_target
                .entry(declaration.target)
                .or_default()
                .insert(declaration.alias);
        }
        Self { aliases_by_target }
    }

    /// Scopes that declare themselves an alias of `scope`. Possibly empty.
    pub fn aliases_for(&self, scope: &TypeName) -> impl Iterator<Item = &TypeName> {
        self.aliases_by_target.get(scope).into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases_by_target.is_empty()
    }
}
