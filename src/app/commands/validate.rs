//! Validate a saved `terraform output -json` document without provisioning.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{AppError, ModuleOutputs, OutputExpectations, TestConfiguration, ValidatedOutputs};

pub fn execute(
    outputs_path: &Path,
    region: &str,
    expectations: &OutputExpectations,
) -> Result<ValidatedOutputs, AppError> {
    if let Some(blank) = expectations.required().iter().find(|name| name.trim().is_empty()) {
        return Err(AppError::config_error(format!(
            "Required output names must not be blank: '{}'",
            blank
        )));
    }

    let content = std::fs::read_to_string(outputs_path).map_err(|e| {
        AppError::config_error(format!("Cannot read {}: {}", outputs_path.display(), e))
    })?;
    let outputs = ModuleOutputs::from_terraform_json(&content)?;
    let config = TestConfiguration::new(".", region, BTreeMap::new());
    Ok(expectations.validate(&config, &outputs)?)
}
