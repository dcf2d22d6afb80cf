//! Whether the framework can instantiate a module without user help.
//!
//! Only used for validation: it never changes which modules are installed.

use crate::decl::{ModuleDecl, Nesting, Visibility};
use crate::kotlin::KotlinMetadata;

/// A module is auto-constructible when it is a Kotlin object (its providers are
/// effectively static), or when it is not an inner class, has no abstract
/// method outside the framework-handled ones, and either all its providers are
/// static or it has a visible no-arg constructor.
pub fn can_auto_construct(module: &ModuleDecl, kotlin: &dyn KotlinMetadata) -> bool {
    if kotlin.is_object_class(&module.name) || kotlin.is_companion_object_class(&module.name) {
        return true;
    }

    !is_inner_class(module)
        && !has_non_framework_abstract_method(module)
        && (has_only_static_providers(module) || has_visible_empty_constructor(module))
}

fn is_inner_class(module: &ModuleDecl) -> bool {
    module.nesting == Nesting::Inner
}

fn has_non_framework_abstract_method(module: &ModuleDecl) -> bool {
    module
        .methods
        .iter()
        .filter(|method| method.is_abstract)
        .any(|method| !method.has_framework_abstract_annotation())
}

fn has_only_static_providers(module: &ModuleDecl) -> bool {
    module.providers().all(|method| method.is_static)
}

fn has_visible_empty_constructor(module: &ModuleDecl) -> bool {
    module.constructors.is_empty()
        || module
            .constructors
            .iter()
            .filter(|constructor| constructor.parameter_count == 0)
            .any(|constructor| constructor.visibility != Visibility::Private)
}
