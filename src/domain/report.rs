use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stages of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Provision,
    Validate,
    Teardown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub status: PhaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a complete run, emitted with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub schema_version: u32,
    pub ok: bool,
    pub role_name: String,
    pub account_id: String,
    pub region: String,
    pub outputs: BTreeMap<String, String>,
    pub phases: Vec<PhaseOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub const SCHEMA_VERSION: u32 = 1;

    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION,
            ok: false,
            role_name: String::new(),
            account_id: String::new(),
            region: String::new(),
            outputs: BTreeMap::new(),
            phases: Vec::new(),
            started_at,
            finished_at: started_at,
        }
    }

    pub fn record(&mut self, phase: Phase, result: Result<(), String>) {
        let (status, error) = match result {
            Ok(()) => (PhaseStatus::Passed, None),
            Err(message) => (PhaseStatus::Failed, Some(message)),
        };
        self.phases.push(PhaseOutcome { phase, status, error });
    }

    pub fn skip(&mut self, phase: Phase) {
        self.phases.push(PhaseOutcome { phase, status: PhaseStatus::Skipped, error: None });
    }

    /// Close the report; `ok` holds only when no phase failed or was skipped.
    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = finished_at;
        self.ok = self.phases.len() == 4 && self.phases.iter().all(|p| p.status == PhaseStatus::Passed);
    }

    pub fn status_of(&self, phase: Phase) -> Option<&PhaseStatus> {
        self.phases.iter().find(|p| p.phase == phase).map(|p| &p.status)
    }
}
