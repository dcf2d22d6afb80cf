//! # graft-core
//!
//! Root metadata for generated dependency-injection components.
//!
//! Given a root (an application class, a test class, or the synthetic default
//! root), the component tree and the aggregated installs of a compilation
//! unit, this crate computes what each generated component contains and checks
//! that user code can be wired up.
//!
//! ## Overview
//!
//! - **Alias resolution**: scopes declared as aliases of another scope are
//!   added wherever that scope applies
//! - **Dependency aggregation**: modules and entry points per component, with
//!   test-only installs, per-test installs and uninstalls
//! - **Root metadata**: per-root modules, entry points and scopes, validated
//!   once at creation
//! - **Root-set validation**: no mixing of app and test roots, one app root,
//!   and consistency with roots recorded by earlier units
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌─────────────────┐
//! │ AliasSource  │   │  ComponentTree   │   │ ComponentDeps   │
//! │ (alias decl) │   │ (descriptors)    │   │ (AggregatedDeps)│
//! └──────┬───────┘   └────────┬─────────┘   └────────┬────────┘
//!        │                    │                      │
//!        └────────────────────┼──────────────────────┘
//!                             ▼
//!                   ┌──────────────────┐
//!                   │   RootMetadata   │──► DiagnosticSink
//!                   │ (one per root)   │
//!                   └────────┬─────────┘
//!                            │
//!                            ▼
//!                   ┌──────────────────┐
//!                   │  RootProcessor   │──► GenerationPlan
//!                   │ (root-set rules) │
//!                   └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use graft_config::ProcessorOptions;
//! use graft_core::{
//!     AggregatedDeps, CollectingSink, ComponentDescriptor, ComponentTree, ProcessingEnv,
//!     PreviousRoots, Root, RootProcessor, type_name,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let singleton = type_name("dagger.hilt.components.SingletonComponent");
//! let tree = ComponentTree::new([ComponentDescriptor::new(singleton)])?;
//!
//! let sink = Arc::new(CollectingSink::new());
//! let env = Arc::new(ProcessingEnv::new(ProcessorOptions::default(), sink.clone()));
//! let processor = RootProcessor::new(env, Arc::new(tree), Arc::new(AggregatedDeps::default()));
//!
//! let plan = processor.process(vec![Root::test(type_name("test.FooTest"))], &PreviousRoots::new())?;
//! for diagnostic in sink.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! println!("{plan:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors and diagnostics
//!
//! Problems in user code are reported through the environment's
//! [`DiagnosticSink`] and processing continues. [`Error`] covers malformed
//! inputs and calls outside an operation's contract.

pub mod alias;
pub mod component;
pub mod constructibility;
pub mod decl;
pub mod deps;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod kotlin;
pub mod metadata;
pub mod names;
pub mod processor;
pub mod root;
pub mod root_set;
pub mod well_known;

pub use alias::{AliasDeclaration, AliasOfs, AliasSource};
pub use component::{ComponentDescriptor, ComponentTree, ComponentTreeError};
pub use constructibility::can_auto_construct;
pub use decl::{ConstructorDecl, MethodDecl, ModuleDecl, ModuleDeclBuilder, Nesting, Visibility};
pub use deps::{AggregatedDeps, AggregatedDepsBuilder, ComponentDependencies};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity};
pub use env::ProcessingEnv;
pub use error::{Error, MetadataError, Result};
pub use kotlin::{KotlinMetadata, KotlinObjects, NoKotlinMetadata};
pub use metadata::{RootMetadata, TestRootMetadata};
pub use names::{TypeName, TypeNameError, type_name};
pub use processor::{GenerationPlan, RootProcessor};
pub use root::{BindValueField, Root, RootKind, SourceElement};
pub use root_set::{PreviousRoots, validate_root_set};

pub use graft_config::ProcessorOptions;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests;
