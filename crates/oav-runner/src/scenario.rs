use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use oav_core::Severity;
use serde::Deserialize;

use crate::config::{Config, OperationsConfig};
use crate::report::FileReport;
use crate::runner::Runner;

#[derive(Debug, Deserialize)]
pub struct ScenarioExpected {
    pub scenario_id: String,
    #[serde(default)]
    pub config: OperationsConfig,
    #[serde(default)]
    pub findings: Vec<ExpectedFinding>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedFinding {
    pub locator: String,
    pub severity: Severity,
    #[serde(default)]
    pub message_contains: Option<String>,
}

#[derive(Debug)]
pub struct ScenarioResult {
    pub expected: ScenarioExpected,
    pub report: FileReport,
}

impl ScenarioResult {
    /// Every finding of the report in evaluation order, across severities.
    fn findings(&self) -> Vec<&oav_core::Diagnostic> {
        let mut all: Vec<_> = self
            .report
            .errors
            .iter()
            .chain(&self.report.warnings)
            .chain(&self.report.infos)
            .collect();
        all.sort_by(|a, b| a.locator.cmp(&b.locator).then(a.severity.cmp(&b.severity)));
        all
    }

    /// Differences between the expected and the produced findings; empty
    /// when the scenario holds. Findings are compared as sets keyed by locator.
    pub fn mismatches(&self) -> Vec<String> {
        let mut expected: Vec<_> = self.expected.findings.iter().collect();
        expected.sort_by(|a, b| a.locator.cmp(&b.locator).then(a.severity.cmp(&b.severity)));
        let actual = self.findings();

        let mut out = Vec::new();
        if expected.len() != actual.len() {
            out.push(format!("expected {} findings, got {}", expected.len(), actual.len()));
        }
        for (exp, got) in expected.iter().zip(actual.iter()) {
            if exp.locator != got.locator || exp.severity != got.severity {
                out.push(format!(
                    "expected {} at {}, got {} at {}",
                    exp.severity, exp.locator, got.severity, got.locator
                ));
            }
            if let Some(needle) = &exp.message_contains {
                if !got.message.contains(needle.as_str()) {
                    out.push(format!("{}: message {:?} lacks {:?}", got.locator, got.message, needle));
                }
            }
        }
        out
    }
}

pub fn load_expected(dir: &Path) -> Result<ScenarioExpected> {
    let p = dir.join("expected.yaml");
    let s = std::fs::read_to_string(&p).with_context(|| format!("read expected.yaml: {}", p.display()))?;
    let exp: ScenarioExpected = serde_yaml::from_str(&s).with_context(|| "parse expected.yaml")?;
    Ok(exp)
}

fn document_path(dir: &Path) -> Result<PathBuf> {
    ["openapi.yaml", "openapi.json"]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| anyhow!("no openapi.yaml or openapi.json in {}", dir.display()))
}

/// Fixture-mode run of one scenario directory: the document is validated
/// with the config recorded in `expected.yaml`, never a discovered one.
pub fn simulate(dir: &Path) -> Result<ScenarioResult> {
    let expected = load_expected(dir)?;
    let doc_path = document_path(dir)?;
    let doc = oav_spec::load_document(&doc_path).with_context(|| format!("load {}", doc_path.display()))?;

    let cfg = Config {
        operations: expected.config.clone(),
    };
    let runner = Runner::with_config(cfg, None);
    let report = runner.validate_document(&doc_path, &doc);
    tracing::debug!(scenario = %expected.scenario_id, "simulated");

    Ok(ScenarioResult { expected, report })
}
