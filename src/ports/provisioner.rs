//! Infrastructure provisioning port definition.

use crate::domain::{AppError, ModuleOutputs, TestConfiguration};

/// Applies and destroys a module described by a [`TestConfiguration`].
pub trait ProvisionerPort {
    /// Initialize the working directory and apply the module.
    fn init_and_apply(&self, config: &TestConfiguration) -> Result<(), AppError>;

    /// Read every output the applied module declares.
    fn output_all(&self, config: &TestConfiguration) -> Result<ModuleOutputs, AppError>;

    /// Destroy everything the module created, including partial applies.
    fn destroy(&self, config: &TestConfiguration) -> Result<(), AppError>;
}
