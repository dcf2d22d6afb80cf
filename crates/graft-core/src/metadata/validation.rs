//! Creation-time checks that every installed module can be instantiated.

use super::RootMetadata;
use crate::well_known::is_singleton_component;

impl RootMetadata {
    /// Check that every installed module can be instantiated, reporting one
    /// error per offending module and component. Returns the number reported.
    ///
    /// Test roots may install instance-bound modules in the singleton
    /// component; the test supplies those instances.
    pub(super) fn validate(&self) -> usize {
        let mut errors = 0;
        for descriptor in self.component_tree.descriptors() {
            let component = descriptor.component();
            for module in self.modules_that_cannot_be_auto_constructed(component) {
                let message = if self.root.is_test_root() && !is_singleton_component(component) {
                    format!(
                        "All test modules (unless installed in SingletonComponent) must use \
                         static provision methods or have a visible, no-arg constructor. \
                         Found: {}",
                        module.name
                    )
                } else if !self.root.is_test_root() {
                    format!(
                        "All modules must be static and use static provision methods or have a \
                         visible, no-arg constructor. Found: {}",
                        module.name
                    )
                } else {
                    continue;
                };

                self.env.report_error(message, Some(self.root.name()));
                errors += 1;
            }
        }
        errors
    }
}
