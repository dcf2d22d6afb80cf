//! Property-based tests over scope expansion, entry points and validation.

use std::sync::Arc;

use indexmap::IndexSet;
use proptest::prelude::*;

use crate::test_utils::{bad_module, env, good_module, singleton};
use crate::well_known::{GENERATED_COMPONENT, TEST_SINGLETON_COMPONENT};
use crate::{
    AggregatedDeps, AliasDeclaration, CollectingSink, ComponentDescriptor, ComponentTree,
    ProcessingEnv, ProcessorOptions, Root, RootMetadata, TypeName, type_name,
};

const SCOPE_POOL: usize = 6;

fn scope(index: usize) -> TypeName {
    type_name(&format!("test.Scope{index}"))
}

fn component(index: usize) -> TypeName {
    if index == 0 {
        singleton()
    } else {
        type_name(&format!("test.Component{index}"))
    }
}

/// A chain of components, each declaring a subset of the scope pool.
fn tree_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..SCOPE_POOL, 0..3), 1..5)
}

fn alias_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..SCOPE_POOL * 2, 0..SCOPE_POOL), 0..8)
}

fn build_tree(scopes: &[Vec<usize>]) -> ComponentTree {
    let descriptors = scopes.iter().enumerate().map(|(index, declared)| {
        let mut descriptor = ComponentDescriptor::new(component(index));
        if index > 0 {
            descriptor = descriptor.with_parent(component(index - 1));
        }
        for &s in declared {
            descriptor = descriptor.with_scope(scope(s));
        }
        descriptor
    });
    ComponentTree::new(descriptors).unwrap()
}

fn alias_name(index: usize) -> TypeName {
    type_name(&format!("test.Alias{index}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: scopes(c) is exactly c's declared scopes plus their aliases.
    #[test]
    fn prop_scopes_are_declared_plus_aliases(
        tree_scopes in tree_strategy(),
        aliases in alias_strategy(),
    ) {
        let declarations: Vec<AliasDeclaration> = aliases
            .iter()
            .map(|&(alias, target)| AliasDeclaration::new(alias_name(alias), scope(target)))
            .collect();
        let sink = Arc::new(CollectingSink::new());
        let env = Arc::new(
            ProcessingEnv::new(ProcessorOptions::default(), sink).with_alias_source(declarations),
        );
        let metadata = RootMetadata::create(
            Root::application(type_name("test.App")),
            Arc::new(build_tree(&tree_scopes)),
            Arc::new(AggregatedDeps::default()),
            env,
        );

        for (index, declared) in tree_scopes.iter().enumerate() {
            let mut expected: IndexSet<TypeName> = declared.iter().map(|&s| scope(s)).collect();
            for &(alias, target) in &aliases {
                if declared.contains(&target) {
                    expected.insert(alias_name(alias));
                }
            }

            let actual = metadata.scopes(&component(index));
            prop_assert_eq!(&actual, &expected);
            // Memoized answers stay stable.
            prop_assert_eq!(metadata.scopes(&component(index)), actual);
        }
    }

    /// Property: entry points always hold the component and exactly one marker.
    #[test]
    fn prop_entry_points_hold_component_and_one_marker(
        tree_scopes in tree_strategy(),
        user_entry_points in prop::collection::vec((0..4usize, 0..10usize), 0..10),
        is_test in any::<bool>(),
    ) {
        let tree = build_tree(&tree_scopes);
        let mut deps = AggregatedDeps::builder();
        for &(owner, entry_point) in &user_entry_points {
            deps = deps.install_entry_point(
                component(owner % tree_scopes.len()),
                type_name(&format!("test.EntryPoint{entry_point}")),
            );
        }

        let (env, _) = env();
        let root = if is_test {
            Root::test(type_name("test.FooTest"))
        } else {
            Root::application(type_name("test.App"))
        };
        let metadata = RootMetadata::create(root, Arc::new(tree), Arc::new(deps.build()), env);

        for index in 0..tree_scopes.len() {
            let c = component(index);
            let entry_points = metadata.entry_points(&c);
            prop_assert!(entry_points.contains(&c));

            let markers = [&*GENERATED_COMPONENT, &*TEST_SINGLETON_COMPONENT]
                .into_iter()
                .filter(|marker| entry_points.contains(*marker))
                .count();
            prop_assert_eq!(markers, 1);
            prop_assert_eq!(entry_points.clone(), metadata.entry_points(&c));
        }
    }

    /// Property: an app root reports one error per unconstructible module.
    #[test]
    fn prop_one_error_per_bad_module(
        modules in prop::collection::vec((0..3usize, any::<bool>()), 0..12),
    ) {
        let tree = build_tree(&[vec![], vec![], vec![]]);
        let mut deps = AggregatedDeps::builder();
        let mut bad = 0;
        for (index, &(owner, is_bad)) in modules.iter().enumerate() {
            let name = format!("test.Module{index}");
            let module = if is_bad {
                bad += 1;
                bad_module(&name)
            } else {
                good_module(&name)
            };
            deps = deps.install_module(component(owner), module);
        }

        let (env, sink) = env();
        RootMetadata::create(
            Root::application(type_name("test.App")),
            Arc::new(tree),
            Arc::new(deps.build()),
            env,
        );
        prop_assert_eq!(sink.error_count(), bad);
    }
}
