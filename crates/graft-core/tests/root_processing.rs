//! Root-set validation across compilation units, through the public API.

use std::sync::Arc;

use graft_core::{
    AggregatedDeps, CollectingSink, ComponentDescriptor, ComponentTree, PreviousRoots,
    ProcessingEnv, ProcessorOptions, Root, RootProcessor, TypeName, type_name,
    validate_root_set,
};

struct Harness {
    sink: Arc<CollectingSink>,
    processor: RootProcessor,
}

impl Harness {
    fn new(options: ProcessorOptions) -> Self {
        let tree = ComponentTree::new([ComponentDescriptor::new(type_name(
            "dagger.hilt.components.SingletonComponent",
        ))])
        .unwrap();
        let sink = Arc::new(CollectingSink::new());
        let env = Arc::new(ProcessingEnv::new(options, sink.clone()));
        let processor = RootProcessor::new(env, Arc::new(tree), Arc::new(AggregatedDeps::default()));
        Self { sink, processor }
    }

    fn messages(&self, roots: Vec<Root>, previous: &PreviousRoots) -> Vec<String> {
        let plan = self.processor.process(roots, previous).unwrap();
        let messages: Vec<String> = self
            .sink
            .errors()
            .into_iter()
            .map(|diagnostic| diagnostic.message)
            .collect();
        assert_eq!(plan.is_none(), !messages.is_empty());
        messages
    }
}

fn previous_test_unit() -> PreviousRoots {
    PreviousRoots::new().with_test_root(type_name(
        "dagger.hilt.processor.internal.root.MyTestPreviousCompilation.MyTest",
    ))
}

#[test]
fn multiple_app_roots() {
    let harness = Harness::new(ProcessorOptions::default());
    let messages = harness.messages(
        vec![
            Root::application(type_name("test.AppRoot1")),
            Root::application(type_name("test.AppRoot2")),
        ],
        &PreviousRoots::new(),
    );

    assert_eq!(
        messages,
        ["Cannot process multiple app roots in the same compilation unit: \
          [test.AppRoot1, test.AppRoot2]"]
    );
}

#[test]
fn app_root_with_test_root() {
    let harness = Harness::new(ProcessorOptions::default());
    let messages = harness.messages(
        vec![
            Root::application(type_name("test.AppRoot")),
            Root::test(type_name("test.TestRoot")),
        ],
        &PreviousRoots::new(),
    );

    assert_eq!(
        messages,
        ["Cannot process test roots and app roots in the same compilation unit:\
          \n  \tApp root in this compilation unit: [test.AppRoot]\
          \n  \tTest roots in this compilation unit: [test.TestRoot]"]
    );
}

#[test]
fn new_test_root_after_previous_test_unit() {
    let harness = Harness::new(ProcessorOptions::default());
    let messages = harness.messages(vec![Root::test(type_name("test.TestRoot"))], &previous_test_unit());

    assert_eq!(
        messages,
        ["Cannot process new roots when there are test roots from a previous compilation unit:\
          \n  \tTest roots from previous compilation unit: \
          [dagger.hilt.processor.internal.root.MyTestPreviousCompilation.MyTest]\
          \n  \tAll roots from this compilation unit: [test.TestRoot]"]
    );
}

#[test]
fn new_app_root_after_previous_test_unit() {
    let harness = Harness::new(ProcessorOptions::default());
    let messages =
        harness.messages(vec![Root::application(type_name("test.AppRoot"))], &previous_test_unit());

    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        "Cannot process new roots when there are test roots from a previous compilation unit:\
         \n  \tTest roots from previous compilation unit: \
         [dagger.hilt.processor.internal.root.MyTestPreviousCompilation.MyTest]\
         \n  \tAll roots from this compilation unit: [test.AppRoot]"
    );
}

#[test]
fn new_app_root_after_previous_app_unit() {
    let harness = Harness::new(ProcessorOptions::default());
    let previous = PreviousRoots::new().with_app_root(type_name("old.OldApp"));
    let messages = harness.messages(vec![Root::application(type_name("test.AppRoot"))], &previous);

    assert_eq!(
        messages,
        ["Cannot process app roots in this compilation unit since there are app roots in a \
          previous compilation unit:\
          \n  \tApp roots in previous compilation unit: [old.OldApp]\
          \n  \tApp roots in this compilation unit: [test.AppRoot]"]
    );
}

#[test]
fn disabled_cross_compilation_validation_allows_new_roots() {
    let options = ProcessorOptions::default().with_cross_compilation_root_validation(false);
    let harness = Harness::new(options);
    let messages = harness.messages(vec![Root::test(type_name("test.TestRoot"))], &previous_test_unit());
    assert!(messages.is_empty());
}

#[test]
fn previous_roots_survive_json() {
    let previous = previous_test_unit().recording(&[Root::test(type_name("test.TestRoot"))]);
    let json = serde_json::to_string(&previous).unwrap();
    assert!(json.contains("\"test.TestRoot\""));

    let restored: PreviousRoots = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, previous);

    let partial: PreviousRoots = serde_json::from_str(r#"{"app_roots": ["test.App"]}"#).unwrap();
    assert_eq!(partial.app_roots, vec![type_name("test.App")]);
    assert!(partial.test_roots.is_empty());
}

#[test]
fn recorded_root_with_explicit_package_is_not_new_after_json() {
    let root = TypeName::new("com.example", &["outer", "FooTest"]).unwrap();
    let previous = PreviousRoots::new().with_test_root(root.clone());

    let json = serde_json::to_string(&previous).unwrap();
    let restored: PreviousRoots = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, previous);
    assert!(restored.contains(&root));

    let sink = Arc::new(CollectingSink::new());
    let env = ProcessingEnv::new(ProcessorOptions::default(), sink.clone());
    assert_eq!(validate_root_set(&[Root::test(root)], &restored, &env), 0);
    assert!(sink.diagnostics().is_empty());
}
