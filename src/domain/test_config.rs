use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Region IAM resources are provisioned in unless overridden.
pub const IAM_REGION: &str = "us-east-1";

/// Environment variable the provisioning tool reads the region from.
pub const REGION_ENV_VAR: &str = "AWS_DEFAULT_REGION";

/// Module input receiving the generated role name.
pub const ROLE_NAME_VAR: &str = "role_name";

/// Module input receiving the caller's account id.
pub const SOURCE_ACCOUNT_VAR: &str = "source_account_id";

/// Inputs and environment for a single provisioning run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestConfiguration {
    module_dir: PathBuf,
    vars: BTreeMap<String, Value>,
    env_vars: BTreeMap<String, String>,
}

impl TestConfiguration {
    /// Build a configuration targeting `region` with the given module inputs.
    pub fn new(module_dir: impl Into<PathBuf>, region: &str, vars: BTreeMap<String, Value>) -> Self {
        let mut env_vars = BTreeMap::new();
        env_vars.insert(REGION_ENV_VAR.to_string(), region.to_string());
        Self { module_dir: module_dir.into(), vars, env_vars }
    }

    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    pub fn vars(&self) -> &BTreeMap<String, Value> {
        &self.vars
    }

    pub fn env_vars(&self) -> &BTreeMap<String, String> {
        &self.env_vars
    }

    /// Region recorded in the environment snapshot, if any.
    pub fn region(&self) -> Option<&str> {
        self.env_vars.get(REGION_ENV_VAR).map(String::as_str)
    }

    /// The value of a string input, if present.
    pub fn string_var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(Value::as_str)
    }

    /// Inputs rendered as `name=value` assignments for the command line.
    ///
    /// Strings are passed raw; every other value is JSON-encoded, which the
    /// HCL parser accepts for lists, maps, numbers and booleans.
    pub fn var_assignments(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, value)| match value {
                Value::String(s) => format!("{}={}", name, s),
                other => format!("{}={}", name, other),
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn without_env_var(mut self, name: &str) -> Self {
        self.env_vars.remove(name);
        self
    }
}
