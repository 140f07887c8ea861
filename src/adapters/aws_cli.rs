use std::process::Command;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::AccountIdentityPort;

/// Subset of `aws sts get-caller-identity` output.
#[derive(Debug, Deserialize)]
struct CallerIdentity {
    #[serde(rename = "Account")]
    account: Option<String>,
}

/// Resolves the caller's account through the AWS CLI.
#[derive(Debug, Clone)]
pub struct AwsCliIdentityAdapter {
    binary: String,
}

impl Default for AwsCliIdentityAdapter {
    fn default() -> Self {
        Self::new("aws")
    }
}

impl AwsCliIdentityAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }
}

impl AccountIdentityPort for AwsCliIdentityAdapter {
    fn current_account_id(&self) -> Result<String, AppError> {
        let output = Command::new(&self.binary)
            .args(["sts", "get-caller-identity", "--output", "json"])
            .output()
            .map_err(|e| {
                AppError::AccountDiscovery(format!("Failed to execute {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::AccountDiscovery(format!(
                "{} sts get-caller-identity failed: {}",
                self.binary,
                stderr.trim()
            )));
        }

        let identity: CallerIdentity = serde_json::from_slice(&output.stdout).map_err(|e| {
            AppError::AccountDiscovery(format!("Unreadable caller identity: {}", e))
        })?;

        match identity.account {
            Some(account) if !account.trim().is_empty() => Ok(account.trim().to_string()),
            _ => Err(AppError::AccountDiscovery("Caller identity has no Account".into())),
        }
    }
}
