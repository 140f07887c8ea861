pub mod error;
pub mod outputs;
pub mod report;
pub mod settings;
pub mod test_config;
pub mod unique_id;
pub mod validation;

pub use error::AppError;
pub use outputs::ModuleOutputs;
pub use report::{Phase, PhaseOutcome, PhaseStatus, RunReport};
pub use settings::{SETTINGS_FILE, Settings, SettingsOverrides, parse_var_assignment};
pub use test_config::{
    IAM_REGION, REGION_ENV_VAR, ROLE_NAME_VAR, SOURCE_ACCOUNT_VAR, TestConfiguration,
};
pub use unique_id::UniqueId;
pub use validation::{
    DEFAULT_REQUIRED_OUTPUTS, OutputExpectations, ValidatedOutputs, ValidationFailure,
};
