//! Snapshot of the outputs a module exposes after apply.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::AppError;
use super::validation::ValidationFailure;

/// One entry of `terraform output -json`.
#[derive(Debug, Deserialize)]
struct RawOutput {
    value: Value,
}

/// Read-only mapping from output name to its untyped value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleOutputs {
    values: BTreeMap<String, Value>,
}

impl ModuleOutputs {
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Parse the document printed by `terraform output -json`.
    ///
    /// Each output is an object carrying `sensitive`, `type` and `value`;
    /// only `value` is kept.
    pub fn from_terraform_json(json: &str) -> Result<Self, AppError> {
        let raw: BTreeMap<String, RawOutput> = serde_json::from_str(json).map_err(|e| {
            AppError::ParseError { what: "terraform output JSON".into(), details: e.to_string() }
        })?;
        Ok(Self::new(raw.into_iter().map(|(name, output)| (name, output.value)).collect()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Read `name` as a non-empty string.
    ///
    /// Values of any other JSON type are reported as a type mismatch
    /// rather than coerced.
    pub fn require_string(&self, name: &str) -> Result<&str, ValidationFailure> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| ValidationFailure::MissingOutput { name: name.to_string() })?;

        let text = value.as_str().ok_or_else(|| ValidationFailure::OutputTypeMismatch {
            name: name.to_string(),
            expected: "string",
            actual: json_type_name(value),
        })?;

        if text.is_empty() {
            return Err(ValidationFailure::EmptyOutput { name: name.to_string() });
        }
        Ok(text)
    }

    /// Render every output as text; strings stay raw, other values become JSON.
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), text)
            })
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
