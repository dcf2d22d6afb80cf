//! Fixtures shared by the unit tests.

use std::sync::Arc;

use graft_config::ProcessorOptions;

use crate::component::{ComponentDescriptor, ComponentTree};
use crate::decl::{ConstructorDecl, MethodDecl, ModuleDecl, Nesting, Visibility};
use crate::diagnostics::CollectingSink;
use crate::env::ProcessingEnv;
use crate::names::{TypeName, type_name};
use crate::well_known::SINGLETON_COMPONENT;

pub const ACTIVITY_COMPONENT: &str = "test.ActivityComponent";
pub const FRAGMENT_COMPONENT: &str = "test.FragmentComponent";
pub const SINGLETON_SCOPE: &str = "test.Singleton";
pub const ACTIVITY_SCOPE: &str = "test.ActivityScoped";

pub fn singleton() -> TypeName {
    SINGLETON_COMPONENT.clone()
}

/// Singleton -> Activity -> Fragment, with scopes on the first two.
pub fn standard_tree() -> Arc<ComponentTree> {
    let tree = ComponentTree::new([
        ComponentDescriptor::new(singleton()).with_scope(type_name(SINGLETON_SCOPE)),
        ComponentDescriptor::new(type_name(ACTIVITY_COMPONENT))
            .with_parent(singleton())
            .with_scope(type_name(ACTIVITY_SCOPE)),
        ComponentDescriptor::new(type_name(FRAGMENT_COMPONENT))
            .with_parent(type_name(ACTIVITY_COMPONENT)),
    ])
    .expect("standard tree is valid");
    Arc::new(tree)
}

pub fn env_with(options: ProcessorOptions) -> (Arc<ProcessingEnv>, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let env = ProcessingEnv::new(options, sink.clone());
    (Arc::new(env), sink)
}

pub fn env() -> (Arc<ProcessingEnv>, Arc<CollectingSink>) {
    env_with(ProcessorOptions::default())
}

/// A module with static providers only.
pub fn good_module(name: &str) -> ModuleDecl {
    ModuleDecl::builder(type_name(name))
        .method(MethodDecl::provides("provide").static_method())
        .build()
}

/// A module with an instance provider and only a private constructor.
pub fn bad_module(name: &str) -> ModuleDecl {
    ModuleDecl::builder(type_name(name))
        .method(MethodDecl::provides("provide"))
        .constructor(ConstructorDecl::no_arg(Visibility::Private))
        .build()
}

/// A non-static nested module.
pub fn inner_module(name: &str) -> ModuleDecl {
    ModuleDecl::builder(type_name(name))
        .nesting(Nesting::Inner)
        .method(MethodDecl::provides("provide"))
        .build()
}
