//! Assertions over the outputs of a provisioned module.

use std::collections::BTreeMap;

use thiserror::Error;

use super::outputs::ModuleOutputs;
use super::test_config::{REGION_ENV_VAR, TestConfiguration};

/// Outputs the IAM role module must expose.
pub const DEFAULT_REQUIRED_OUTPUTS: [&str; 2] = ["role_name", "arn"];

/// First assertion that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("environment variable {name} is not set")]
    MissingEnvVar { name: String },

    #[error("environment variable {name} is empty")]
    EmptyEnvVar { name: String },

    #[error("module produced no outputs")]
    NoOutputs,

    #[error("output '{name}' is missing")]
    MissingOutput { name: String },

    #[error("output '{name}' is empty")]
    EmptyOutput { name: String },

    #[error("output '{name}' is {actual}, expected {expected}")]
    OutputTypeMismatch { name: String, expected: &'static str, actual: &'static str },
}

/// What a successful run must look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputExpectations {
    region_env_var: String,
    required: Vec<String>,
}

impl Default for OutputExpectations {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_OUTPUTS.iter().map(|s| s.to_string()).collect())
    }
}

/// Values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOutputs {
    pub region: String,
    pub values: BTreeMap<String, String>,
}

impl OutputExpectations {
    pub fn new(required: Vec<String>) -> Self {
        Self { region_env_var: REGION_ENV_VAR.to_string(), required }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Check the environment snapshot and outputs, stopping at the first failure.
    ///
    /// Order: region present, outputs non-empty, then every required output
    /// in declaration order.
    pub fn validate(
        &self,
        config: &TestConfiguration,
        outputs: &ModuleOutputs,
    ) -> Result<ValidatedOutputs, ValidationFailure> {
        let region = config
            .env_vars()
            .get(&self.region_env_var)
            .ok_or_else(|| ValidationFailure::MissingEnvVar { name: self.region_env_var.clone() })?;
        if region.is_empty() {
            return Err(ValidationFailure::EmptyEnvVar { name: self.region_env_var.clone() });
        }

        if outputs.is_empty() {
            return Err(ValidationFailure::NoOutputs);
        }

        let mut values = BTreeMap::new();
        for name in &self.required {
            let value = outputs.require_string(name)?;
            values.insert(name.clone(), value.to_string());
        }

        Ok(ValidatedOutputs { region: region.clone(), values })
    }
}
