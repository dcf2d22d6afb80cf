//! One processing round: validate the roots of a compilation unit and decide
//! which of them get their own components.

use std::fmt;
use std::sync::Arc;

use crate::component::ComponentTree;
use crate::deps::ComponentDependencies;
use crate::env::ProcessingEnv;
use crate::error::MetadataError;
use crate::metadata::RootMetadata;
use crate::root::Root;
use crate::root_set::{PreviousRoots, validate_root_set};

/// Which roots get dedicated components and which share the default root's.
#[derive(Debug)]
pub struct GenerationPlan {
    dedicated: Vec<RootMetadata>,
    shared: Option<RootMetadata>,
}

impl GenerationPlan {
    /// Roots generating their own component hierarchy.
    pub fn dedicated(&self) -> &[RootMetadata] {
        &self.dedicated
    }

    /// The default root, when this unit generates one.
    pub fn shared(&self) -> Option<&RootMetadata> {
        self.shared.as_ref()
    }

    /// Roots whose components come from the default root.
    pub fn roots_sharing_components(&self) -> &[RootMetadata] {
        self.shared
            .as_ref()
            .map(RootMetadata::roots_using_default_components)
            .unwrap_or_default()
    }

    /// Every metadata to generate code for, default root last.
    pub fn generated(&self) -> impl Iterator<Item = &RootMetadata> {
        self.dedicated.iter().chain(self.shared.as_ref())
    }

    pub fn into_parts(self) -> (Vec<RootMetadata>, Option<RootMetadata>) {
        (self.dedicated, self.shared)
    }
}

/// Drives root validation and generation planning for one round.
pub struct RootProcessor {
    env: Arc<ProcessingEnv>,
    component_tree: Arc<ComponentTree>,
    deps: Arc<dyn ComponentDependencies>,
}

impl RootProcessor {
    pub fn new(
        env: Arc<ProcessingEnv>,
        component_tree: Arc<ComponentTree>,
        deps: Arc<dyn ComponentDependencies>,
    ) -> Self {
        Self {
            env,
            component_tree,
            deps,
        }
    }

    pub fn env(&self) -> &ProcessingEnv {
        &self.env
    }

    /// Validate the root set, then plan generation if it is consistent.
    ///
    /// Returns `Ok(None)` when root-set errors were reported; there is nothing
    /// sensible to generate for an inconsistent unit.
    ///
    /// # Errors
    ///
    /// See [`RootProcessor::plan_generation`].
    pub fn process(
        &self,
        roots: Vec<Root>,
        previous: &PreviousRoots,
    ) -> Result<Option<GenerationPlan>, MetadataError> {
        if validate_root_set(&roots, previous, &self.env) > 0 {
            return Ok(None);
        }
        self.plan_generation(roots).map(Some)
    }

    /// Build metadata for every root and split them into dedicated and shared.
    ///
    /// A unit made only of test roots gets a default root when sharing is
    /// enabled, hosting every test root that can share components. With no
    /// such root the default root still carries the early entry points.
    ///
    /// # Errors
    ///
    /// `MetadataError::InvalidCall` if `roots` contains the default root; it is
    /// only ever created here.
    pub fn plan_generation(&self, roots: Vec<Root>) -> Result<GenerationPlan, MetadataError> {
        if let Some(root) = roots.iter().find(|root| root.is_default_root()) {
            return Err(MetadataError::invalid_call(
                "plan_generation",
                format!("{} is created by the processor and cannot be passed in", root.name()),
            ));
        }

        let is_test_unit =
            !roots.is_empty() && roots.iter().all(|root| !root.is_application_root());
        let use_default_root = is_test_unit && self.env.options().share_test_components;

        let (sharing, dedicated): (Vec<_>, Vec<_>) = roots
            .into_iter()
            .map(|root| self.metadata_for(root))
            .partition(|metadata| use_default_root && metadata.can_share_components());

        tracing::debug!(
            dedicated = dedicated.len(),
            sharing = sharing.len(),
            default_root = use_default_root,
            "Partitioned roots for generation"
        );

        let shared = if use_default_root {
            Some(RootMetadata::create_for_default_root(
                Root::default_root(),
                sharing,
                self.component_tree.clone(),
                self.deps.clone(),
                self.env.clone(),
            )?)
        } else {
            None
        };

        Ok(GenerationPlan { dedicated, shared })
    }

    fn metadata_for(&self, root: Root) -> RootMetadata {
        RootMetadata::create(
            root,
            self.component_tree.clone(),
            self.deps.clone(),
            self.env.clone(),
        )
    }
}

impl fmt::Debug for RootProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootProcessor")
            .field("env", &self.env)
            .field("components", &self.component_tree.len())
            .finish_non_exhaustive()
    }
}
