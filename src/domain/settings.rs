//! `tfverify.toml` settings and their command-line overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use super::AppError;
use super::test_config::{IAM_REGION, ROLE_NAME_VAR, SOURCE_ACCOUNT_VAR};
use super::validation::{DEFAULT_REQUIRED_OUTPUTS, OutputExpectations};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "tfverify.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub module: ModuleSettings,
    #[serde(default)]
    pub vars: BTreeMap<String, Value>,
    #[serde(default)]
    pub outputs: OutputSettings,
    #[serde(default)]
    pub tools: ToolSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSettings {
    #[serde(default = "default_module_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub name_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default = "default_required_outputs")]
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    #[serde(default = "default_terraform")]
    pub terraform: String,
    #[serde(default = "default_aws")]
    pub aws: String,
}

fn default_module_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_region() -> String {
    IAM_REGION.to_string()
}

fn default_required_outputs() -> Vec<String> {
    DEFAULT_REQUIRED_OUTPUTS.iter().map(|s| s.to_string()).collect()
}

fn default_terraform() -> String {
    "terraform".to_string()
}

fn default_aws() -> String {
    "aws".to_string()
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self { dir: default_module_dir(), region: default_region(), name_prefix: String::new() }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { required: default_required_outputs() }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self { terraform: default_terraform(), aws: default_aws() }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            module: ModuleSettings::default(),
            vars: BTreeMap::new(),
            outputs: OutputSettings::default(),
            tools: ToolSettings::default(),
        }
    }
}

/// Values given on the command line; `None`/empty leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub module_dir: Option<PathBuf>,
    pub region: Option<String>,
    pub name_prefix: Option<String>,
    pub vars: Vec<(String, String)>,
    pub terraform_bin: Option<String>,
    pub aws_bin: Option<String>,
}

impl Settings {
    /// Load settings from `explicit`, or from `tfverify.toml` under `cwd`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, AppError> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::SettingsFileMissing(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => {
                let path = cwd.join(SETTINGS_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate settings from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.module.region.trim().is_empty() {
            return Err(AppError::config_error("module.region must not be empty"));
        }
        if self.outputs.required.is_empty() {
            return Err(AppError::config_error("outputs.required must list at least one output"));
        }
        if let Some(blank) = self.outputs.required.iter().find(|name| name.trim().is_empty()) {
            return Err(AppError::config_error(format!(
                "outputs.required contains a blank name: '{}'",
                blank
            )));
        }
        if self.tools.terraform.trim().is_empty() || self.tools.aws.trim().is_empty() {
            return Err(AppError::config_error("tools.terraform and tools.aws must not be empty"));
        }
        for reserved in [ROLE_NAME_VAR, SOURCE_ACCOUNT_VAR] {
            if self.vars.contains_key(reserved) {
                return Err(AppError::config_error(format!(
                    "vars.{} is generated for every run and cannot be set",
                    reserved
                )));
            }
        }
        Ok(())
    }

    /// Apply command-line overrides, then re-validate.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self, AppError> {
        if let Some(dir) = overrides.module_dir {
            self.module.dir = dir;
        }
        if let Some(region) = overrides.region {
            self.module.region = region;
        }
        if let Some(prefix) = overrides.name_prefix {
            self.module.name_prefix = prefix;
        }
        for (name, value) in overrides.vars {
            self.vars.insert(name, Value::String(value));
        }
        if let Some(terraform) = overrides.terraform_bin {
            self.tools.terraform = terraform;
        }
        if let Some(aws) = overrides.aws_bin {
            self.tools.aws = aws;
        }
        self.validate()?;
        Ok(self)
    }

    /// Anchor tool paths with more than one component to `cwd`.
    ///
    /// Terraform runs inside the module directory, so a relative path such as
    /// `../bin/terraform` must be fixed before it reaches the adapters. Bare
    /// names stay untouched for `PATH` lookup.
    pub fn resolve_tool_paths(mut self, cwd: &Path) -> Self {
        self.tools.terraform = anchor_tool_path(&self.tools.terraform, cwd);
        self.tools.aws = anchor_tool_path(&self.tools.aws, cwd);
        self
    }

    pub fn expectations(&self) -> OutputExpectations {
        OutputExpectations::new(self.outputs.required.clone())
    }
}

fn anchor_tool_path(tool: &str, cwd: &Path) -> String {
    let path = Path::new(tool);
    if path.is_absolute() || path.components().count() <= 1 {
        return tool.to_string();
    }
    cwd.join(path).to_string_lossy().into_owned()
}

/// Split a `name=value` assignment given with `--var`.
pub fn parse_var_assignment(raw: &str) -> Result<(String, String), AppError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::config_error(format!("Expected name=value, got '{}'", raw)))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::config_error(format!("Variable name missing in '{}'", raw)));
    }
    Ok((name.to_string(), value.to_string()))
}
