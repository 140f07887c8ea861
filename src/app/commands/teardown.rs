//! Destroy-on-exit guard for provisioned resources.

use crate::domain::{AppError, TestConfiguration};
use crate::ports::ProvisionerPort;

/// Destroys the module exactly once.
///
/// Call [`TeardownGuard::finish`] to destroy and observe the result. If the
/// guard is dropped without `finish` (for example while unwinding from a
/// panic), destroy still runs and its error is printed.
pub struct TeardownGuard<'a, P: ProvisionerPort> {
    provisioner: &'a P,
    config: &'a TestConfiguration,
    done: bool,
}

impl<'a, P: ProvisionerPort> TeardownGuard<'a, P> {
    /// Arm the guard. Must happen before apply starts so partial applies are cleaned up.
    pub fn arm(provisioner: &'a P, config: &'a TestConfiguration) -> Self {
        Self { provisioner, config, done: false }
    }

    pub fn finish(mut self) -> Result<(), AppError> {
        self.done = true;
        self.provisioner.destroy(self.config)
    }
}

impl<P: ProvisionerPort> Drop for TeardownGuard<'_, P> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if let Err(e) = self.provisioner.destroy(self.config) {
            eprintln!("  ❌ Teardown failed: {}", e);
        }
    }
}
