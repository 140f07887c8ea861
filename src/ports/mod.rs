mod account_identity;
mod provisioner;

pub use account_identity::AccountIdentityPort;
pub use provisioner::ProvisionerPort;
