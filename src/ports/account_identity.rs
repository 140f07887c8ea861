use crate::domain::AppError;

/// Source of the cloud account the current credentials belong to.
pub trait AccountIdentityPort {
    /// Return the account id of the caller.
    fn current_account_id(&self) -> Result<String, AppError>;
}
