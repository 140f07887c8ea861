use std::process::Command;

use crate::domain::{AppError, ModuleOutputs, TestConfiguration};
use crate::ports::ProvisionerPort;

/// Drives a module through the `terraform` CLI.
#[derive(Debug, Clone)]
pub struct TerraformCommandAdapter {
    binary: String,
}

impl Default for TerraformCommandAdapter {
    fn default() -> Self {
        Self::new("terraform")
    }
}

impl TerraformCommandAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }

    fn run(&self, args: &[String], config: &TestConfiguration) -> Result<String, AppError> {
        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        let tool = format!("{} {}", self.binary, subcommand);

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(config.module_dir())
            .envs(config.env_vars())
            .env("TF_IN_AUTOMATION", "1")
            .output()
            .map_err(|e| AppError::ExternalToolError {
                tool: tool.clone(),
                error: format!("Failed to execute {}: {}", self.binary, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ExternalToolError {
                tool,
                error: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn with_var_args(base: &[&str], config: &TestConfiguration) -> Vec<String> {
        let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
        for assignment in config.var_assignments() {
            args.push("-var".to_string());
            args.push(assignment);
        }
        args
    }
}

impl ProvisionerPort for TerraformCommandAdapter {
    fn init_and_apply(&self, config: &TestConfiguration) -> Result<(), AppError> {
        let init = ["init", "-input=false", "-no-color"].map(String::from);
        self.run(&init, config).map_err(|e| AppError::ApplyFailed(e.to_string()))?;

        let apply =
            Self::with_var_args(&["apply", "-input=false", "-auto-approve", "-no-color"], config);
        self.run(&apply, config).map_err(|e| AppError::ApplyFailed(e.to_string()))?;
        Ok(())
    }

    fn output_all(&self, config: &TestConfiguration) -> Result<ModuleOutputs, AppError> {
        let args = ["output", "-json", "-no-color"].map(String::from);
        let json = self.run(&args, config)?;
        ModuleOutputs::from_terraform_json(&json)
    }

    fn destroy(&self, config: &TestConfiguration) -> Result<(), AppError> {
        let destroy =
            Self::with_var_args(&["destroy", "-input=false", "-auto-approve", "-no-color"], config);
        self.run(&destroy, config).map_err(|e| AppError::DestroyFailed(e.to_string()))?;
        Ok(())
    }
}
