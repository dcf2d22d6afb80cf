//! Kotlin declaration kinds, supplied by whoever reads Kotlin metadata.

use rustc_hash::FxHashSet as HashSet;

use crate::names::TypeName;

/// Classifies module types that are Kotlin `object` or `companion object`
/// declarations. Their providers behave as static.
pub trait KotlinMetadata {
    fn is_object_class(&self, type_name: &TypeName) -> bool;

    fn is_companion_object_class(&self, type_name: &TypeName) -> bool;
}

/// For compilations without Kotlin sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKotlinMetadata;

impl KotlinMetadata for NoKotlinMetadata {
    fn is_object_class(&self, _type_name: &TypeName) -> bool {
        false
    }

    fn is_companion_object_class(&self, _type_name: &TypeName) -> bool {
        false
    }
}

/// A fixed set of known object and companion-object declarations.
#[derive(Debug, Clone, Default)]
pub struct KotlinObjects {
    objects: HashSet<TypeName>,
    companions: HashSet<TypeName>,
}

impl KotlinObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, type_name: TypeName) -> Self {
        self.objects.insert(type_name);
        self
    }

    pub fn with_companion_object(mut self, type_name: TypeName) -> Self {
        self.companions.insert(type_name);
        self
    }
}

impl KotlinMetadata for KotlinObjects {
    fn is_object_class(&self, type_name: &TypeName) -> bool {
        self.objects.contains(type_name)
    }

    fn is_companion_object_class(&self, type_name: &TypeName) -> bool {
        self.companions.contains(type_name)
    }
}
