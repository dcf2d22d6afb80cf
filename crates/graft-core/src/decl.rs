//! Declaration-level view of the modules installed into components.
//!
//! Only the facts needed to decide whether the framework can instantiate a
//! module are modelled: nesting, method modifiers/annotations and constructors.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::names::TypeName;
use crate::well_known::{FRAMEWORK_ABSTRACT_METHOD_ANNOTATIONS, PROVIDES};

/// How a type is nested in its enclosing declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Nesting {
    #[default]
    TopLevel,
    /// Nested but independently instantiable.
    StaticNested,
    /// Nested and bound to an instance of its enclosing type.
    Inner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub is_static: bool,
    pub is_abstract: bool,
    pub annotations: Vec<TypeName>,
}

impl MethodDecl {
    /// A concrete instance method with no annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            is_abstract: false,
            annotations: Vec::new(),
        }
    }

    /// An instance provider method.
    pub fn provides(name: impl Into<String>) -> Self {
        Self::new(name).annotated(PROVIDES.clone())
    }

    /// An abstract method implemented by generated code (`Binds`).
    pub fn binds(name: impl Into<String>) -> Self {
        Self::new(name)
            .abstract_method()
            .annotated(FRAMEWORK_ABSTRACT_METHOD_ANNOTATIONS[0].clone())
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_method(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn annotated(mut self, annotation: TypeName) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn has_annotation(&self, annotation: &TypeName) -> bool {
        self.annotations.iter().any(|a| a == annotation)
    }

    pub fn is_provider(&self) -> bool {
        self.has_annotation(&PROVIDES)
    }

    /// Abstract methods carrying one of these annotations are satisfied by
    /// generated code rather than by the module instance.
    pub fn has_framework_abstract_annotation(&self) -> bool {
        FRAMEWORK_ABSTRACT_METHOD_ANNOTATIONS
            .iter()
            .any(|annotation| self.has_annotation(annotation))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub parameter_count: usize,
    pub visibility: Visibility,
}

impl ConstructorDecl {
    pub fn no_arg(visibility: Visibility) -> Self {
        Self {
            parameter_count: 0,
            visibility,
        }
    }

    pub fn with_parameters(parameter_count: usize, visibility: Visibility) -> Self {
        Self {
            parameter_count,
            visibility,
        }
    }
}

/// A module type as seen by the root processor. Two declarations with the
/// same name are the same module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub name: TypeName,
    pub nesting: Nesting,
    pub methods: Vec<MethodDecl>,
    /// Declared constructors. Empty means only the implicit default constructor exists.
    pub constructors: Vec<ConstructorDecl>,
}

impl ModuleDecl {
    pub fn builder(name: TypeName) -> ModuleDeclBuilder {
        ModuleDeclBuilder {
            decl: Self {
                name,
                nesting: Nesting::TopLevel,
                methods: Vec::new(),
                constructors: Vec::new(),
            },
        }
    }

    pub fn providers(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| m.is_provider())
    }
}

impl PartialEq for ModuleDecl {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ModuleDecl {}

impl Hash for ModuleDecl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

pub struct ModuleDeclBuilder {
    decl: ModuleDecl,
}

impl ModuleDeclBuilder {
    pub fn nesting(mut self, nesting: Nesting) -> Self {
        self.decl.nesting = nesting;
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.decl.methods.push(method);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.decl.constructors.push(constructor);
        self
    }

    pub fn build(self) -> ModuleDecl {
        self.decl
    }
}
