use crate::ports::{AccountIdentityPort, ProvisionerPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<I: AccountIdentityPort, P: ProvisionerPort> {
    identity: I,
    provisioner: P,
}

impl<I: AccountIdentityPort, P: ProvisionerPort> AppContext<I, P> {
    /// Create a new application context.
    pub fn new(identity: I, provisioner: P) -> Self {
        Self { identity, provisioner }
    }

    /// Get a reference to the account identity source.
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Get a reference to the provisioner.
    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }
}
