//! CLI command implementations.
//!
//! Provides the pieces the `tuglint` binary wires together:
//! - [`collect_inputs`]: expand paths into snapshot files
//! - [`select_rules`]: pick rules from resolved configuration
//! - [`run_check`]: load and scan every snapshot
//! - [`list_rules`]: describe the rule registry

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use tuglint_core::config::{ResolvedConfig, PROJECT_CONFIG_FILE};
use tuglint_core::error::LintError;
use tuglint_core::output::{CheckResponse, RulesResponse};
use tuglint_java::rules::{all_rules, default_rules, rules_for, Rule};
use tuglint_java::{load_snapshot, scan_snapshot};

/// Expand `paths` into the list of snapshot files to check.
///
/// Files are taken as given. Directories are walked recursively for `*.json`
/// files in sorted order, skipping the project config file.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, LintError> {
    if paths.is_empty() {
        return Err(LintError::invalid_args("no input paths given"));
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_file() {
            inputs.push(path.clone());
        } else if path.is_dir() {
            inputs.extend(walk_snapshots(path)?);
        } else {
            return Err(LintError::file_not_found(path.display().to_string()));
        }
    }
    debug!(count = inputs.len(), "collected snapshot inputs");
    Ok(inputs)
}

fn walk_snapshots(dir: &Path) -> Result<Vec<PathBuf>, LintError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            LintError::internal(format!("failed to walk {}: {}", dir.display(), e))
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_config = entry.file_name() == PROJECT_CONFIG_FILE;
        if is_json && !is_config {
            found.push(path.to_path_buf());
        }
    }
    Ok(found)
}

/// Rules named by configuration, or every default rule.
pub fn select_rules(config: &ResolvedConfig) -> Result<Vec<Box<dyn Rule>>, LintError> {
    match &config.rules {
        Some(keys) => rules_for(&keys.value),
        None => Ok(default_rules()),
    }
}

/// Load and scan each snapshot, merging results into one response.
pub fn run_check(inputs: &[PathBuf], rules: &[Box<dyn Rule>]) -> Result<CheckResponse, LintError> {
    let mut findings = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        let snapshot = load_snapshot(input)?;
        let report = scan_snapshot(&snapshot, rules);
        info!(
            path = %input.display(),
            findings = report.findings.len(),
            failures = report.failures.len(),
            "checked snapshot"
        );
        findings.extend(report.finding_outputs(&snapshot.store));
        failures.extend(report.failure_outputs(&snapshot.store));
    }

    Ok(CheckResponse::new(inputs.len(), findings, failures))
}

/// Describe every registered rule.
pub fn list_rules() -> RulesResponse {
    RulesResponse::new(all_rules().iter().map(|r| r.metadata().to_info()).collect())
}
