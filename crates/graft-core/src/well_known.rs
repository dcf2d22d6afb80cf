//! Framework type names the root processor reasons about directly.

use once_cell::sync::Lazy;

use crate::names::{TypeName, type_name};

/// The application-wide (top-level) component.
pub static SINGLETON_COMPONENT: Lazy<TypeName> =
    Lazy::new(|| type_name("dagger.hilt.components.SingletonComponent"));

/// Marker entry point installed in the singleton component of test roots.
pub static TEST_SINGLETON_COMPONENT: Lazy<TypeName> =
    Lazy::new(|| type_name("dagger.hilt.internal.TestSingletonComponent"));

/// Marker entry point installed in every other generated component.
pub static GENERATED_COMPONENT: Lazy<TypeName> =
    Lazy::new(|| type_name("dagger.hilt.internal.GeneratedComponent"));

/// Module whose instance is always supplied by generated code.
pub static APPLICATION_CONTEXT_MODULE: Lazy<TypeName> =
    Lazy::new(|| type_name("dagger.hilt.android.internal.modules.ApplicationContextModule"));

/// Identity of the synthetic root hosting shared test components.
pub static DEFAULT_ROOT: Lazy<TypeName> =
    Lazy::new(|| type_name("dagger.hilt.android.internal.testing.root.Default"));

/// Annotation marking provider methods on a module.
pub static PROVIDES: Lazy<TypeName> = Lazy::new(|| type_name("dagger.Provides"));

/// Abstract-method annotations whose methods are implemented by generated code.
pub static FRAMEWORK_ABSTRACT_METHOD_ANNOTATIONS: Lazy<[TypeName; 3]> = Lazy::new(|| {
    [
        type_name("dagger.Binds"),
        type_name("dagger.multibindings.Multibinds"),
        type_name("dagger.BindsOptionalOf"),
    ]
});

pub fn is_singleton_component(component: &TypeName) -> bool {
    component == &*SINGLETON_COMPONENT
}
