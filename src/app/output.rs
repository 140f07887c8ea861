//! Canonical report output helper.
//!
//! Writes compact single-line JSON to stdout, and optionally appends
//! `json=<...>` to `GITHUB_OUTPUT` when set.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;

/// Write a report in canonical format.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_json_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = to_single_line(output)?;
    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        append_github_output(Path::new(&path), &json)?;
    }
    Ok(())
}

fn to_single_line<T: Serialize>(output: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(output)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize report: {}", e)))?;
    debug_assert!(!json.contains('\n'), "report JSON must be single-line");
    Ok(json)
}

fn append_github_output(path: &Path, json: &str) -> Result<(), AppError> {
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
        AppError::config_error(format!("Failed to open GITHUB_OUTPUT: {}", e))
    })?;
    writeln!(file, "json={}", json)
        .map_err(|e| AppError::config_error(format!("Failed to write GITHUB_OUTPUT: {}", e)))?;
    Ok(())
}
