//! Check report aggregation.
//!
//! Sections collect one [`ProbeRecord`] per probe; the final
//! [`CheckReport`] tallies them and decides the process exit. The whole
//! tree serializes to JSON for `check --json`.

use serde::Serialize;

use crate::ui::UserInterface;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The probe ran and succeeded.
    Passed,
    /// The interpreter reported a missing module.
    Missing,
    /// Any other failure, including launch problems.
    Error,
}

impl ProbeOutcome {
    pub fn is_pass(self) -> bool {
        matches!(self, ProbeOutcome::Passed)
    }
}

/// One probe's name, outcome, and optional detail line.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRecord {
    pub name: String,
    pub outcome: ProbeOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProbeRecord {
    pub fn passed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outcome: ProbeOutcome::Passed,
            detail: None,
        }
    }

    pub fn passed_with(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: ProbeOutcome::Passed,
            detail: Some(detail.into()),
        }
    }

    pub fn missing(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: ProbeOutcome::Missing,
            detail: Some(detail.into()),
        }
    }

    pub fn error(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: ProbeOutcome::Error,
            detail: Some(detail.into()),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.outcome.is_pass()
    }

    /// Prints this record as a status line. Missing modules are errors,
    /// everything else that failed is warning-flavored.
    pub fn emit(&self, ui: &mut dyn UserInterface) {
        let line = match &self.detail {
            Some(detail) => format!("{}: {}", self.name, detail),
            None => self.name.clone(),
        };
        match self.outcome {
            ProbeOutcome::Passed => ui.success(&line),
            ProbeOutcome::Missing => ui.error(&line),
            ProbeOutcome::Error => ui.warning(&line),
        }
    }
}

/// All probe records of one check section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub probes: Vec<ProbeRecord>,
}

impl SectionReport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            probes: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ProbeRecord) {
        self.probes.push(record);
    }

    pub fn passed_count(&self) -> usize {
        self.probes.iter().filter(|p| p.is_pass()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.probes.len() - self.passed_count()
    }

    /// A section passes only when every probe in it passed.
    pub fn is_pass(&self) -> bool {
        self.probes.iter().all(ProbeRecord::is_pass)
    }
}

/// Probe tallies across all sections.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success: bool,
}

/// The full result of a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Interpreter the probes ran through, if one resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
    pub sections: Vec<SectionReport>,
    pub summary: Summary,
}

impl CheckReport {
    pub fn new(interpreter: Option<String>, sections: Vec<SectionReport>) -> Self {
        let total = sections.iter().map(|s| s.probes.len()).sum();
        let passed = sections.iter().map(SectionReport::passed_count).sum();
        let summary = Summary {
            total,
            passed,
            failed: total - passed,
            success: sections.iter().all(SectionReport::is_pass),
        };
        Self {
            interpreter,
            sections,
            summary,
        }
    }

    pub fn success(&self) -> bool {
        self.summary.success
    }

    /// Pretty-printed JSON for `check --json`.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }
}
