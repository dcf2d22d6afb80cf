//! Everything a round reads that is not specific to one root.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use graft_config::ProcessorOptions;

use crate::alias::{AliasDeclaration, AliasSource};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::kotlin::{KotlinMetadata, NoKotlinMetadata};
use crate::names::TypeName;

/// Options, collaborator queries and the diagnostic sink for one processing round.
///
/// Passed explicitly so tests can combine arbitrary flags and sinks without
/// process-wide state.
pub struct ProcessingEnv {
    options: ProcessorOptions,
    aliases: Arc<dyn AliasSource>,
    kotlin: Arc<dyn KotlinMetadata>,
    messager: Arc<dyn DiagnosticSink>,
}

impl ProcessingEnv {
    /// An environment with no alias declarations and no Kotlin objects.
    pub fn new(options: ProcessorOptions, messager: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            options,
            aliases: Arc::new(Vec::<AliasDeclaration>::new()),
            kotlin: Arc::new(NoKotlinMetadata),
            messager,
        }
    }

    /// Load options from `config_path` (or `graft.toml` in the working
    /// directory) and the environment, then build an environment around them.
    pub fn load(
        config_path: Option<&Path>,
        messager: Arc<dyn DiagnosticSink>,
    ) -> crate::Result<Self> {
        let options = ProcessorOptions::load(config_path)?;
        Ok(Self::new(options, messager))
    }

    pub fn with_alias_source(mut self, aliases: impl AliasSource + 'static) -> Self {
        self.aliases = Arc::new(aliases);
        self
    }

    pub fn with_kotlin_metadata(mut self, kotlin: impl KotlinMetadata + 'static) -> Self {
        self.kotlin = Arc::new(kotlin);
        self
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    pub fn aliases(&self) -> &dyn AliasSource {
        self.aliases.as_ref()
    }

    pub fn kotlin(&self) -> &dyn KotlinMetadata {
        self.kotlin.as_ref()
    }

    pub fn messager(&self) -> &dyn DiagnosticSink {
        self.messager.as_ref()
    }

    pub fn report_error(&self, message: impl Into<String>, element: Option<&TypeName>) {
        self.messager
            .report(Diagnostic::error(message, element.cloned()));
    }
}

impl fmt::Debug for ProcessingEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessingEnv")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
