//! tfverify: provision a Terraform module, validate its outputs, and tear it down again.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::{AwsCliIdentityAdapter, TerraformCommandAdapter};
use app::{AppContext, commands, output::write_json_output};

pub use app::commands::run::RunOutcome;
pub use domain::{
    AppError, IAM_REGION, ModuleOutputs, OutputExpectations, RunReport, Settings,
    SettingsOverrides, TestConfiguration, UniqueId, ValidatedOutputs, ValidationFailure,
};

/// Load `tfverify.toml` (or `config`) and apply command-line overrides.
///
/// Relative tool paths are resolved against the current directory.
pub fn load_settings(
    config: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<Settings, AppError> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(config, &cwd)?.with_overrides(overrides)?;
    Ok(settings.resolve_tool_paths(&cwd))
}

// =============================================================================
// Run Command API
// =============================================================================

/// Run the full check: discover the account, apply the module, validate its
/// outputs and destroy it.
///
/// Teardown runs whenever apply was attempted. With `json`, the run report is
/// written to stdout (and `GITHUB_OUTPUT`) whether or not the run passed.
pub fn run(settings: &Settings, json: bool) -> Result<RunReport, AppError> {
    let identity = AwsCliIdentityAdapter::new(settings.tools.aws.clone());
    let provisioner = TerraformCommandAdapter::new(settings.tools.terraform.clone());
    let ctx = AppContext::new(identity, provisioner);

    let outcome = commands::run::execute(&ctx, settings);
    let written = if json { write_json_output(&outcome.report) } else { Ok(()) };

    let report = outcome.into_result()?;
    written?;
    eprintln!("✅ Module check passed for role {}", report.role_name);
    Ok(report)
}

// =============================================================================
// Validate Command API
// =============================================================================

/// Validate a saved `terraform output -json` document.
///
/// An empty `required` list checks the default `role_name` and `arn` outputs.
pub fn validate_outputs(
    outputs_path: &Path,
    region: &str,
    required: Vec<String>,
) -> Result<ValidatedOutputs, AppError> {
    let expectations = if required.is_empty() {
        OutputExpectations::default()
    } else {
        OutputExpectations::new(required)
    };
    commands::validate::execute(outputs_path, region, &expectations)
}

/// Generate a unique identifier suitable for resource names.
pub fn unique_id(prefix: Option<&str>) -> UniqueId {
    UniqueId::with_prefix(prefix.unwrap_or_default())
}
