// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Scan engine: hands class declarations to subscribed rules.
//!
//! For each compilation unit the engine collects every class declaration
//! (top-level, member, local and anonymous) in pre-order, then runs each rule
//! on each declaration whose kind the rule subscribes to. A rule that faults
//! on one declaration is reported through [`FindingSink::check_failed`]; the
//! scan moves on to the next declaration and the next rule.

use tracing::{debug, warn};
use tuglint_core::facts::FactsStore;
use tuglint_core::output::{CheckResponse, FailureOutput, FindingOutput};
use tuglint_core::query::SymbolQuery;

use crate::finding::{CheckFailure, Finding};
use crate::rules::{Rule, RuleContext};
use crate::snapshot::Snapshot;
use crate::tree::CompilationUnit;
use crate::visitor::ClassCollector;

/// Receives scan results. Owned by the caller.
pub trait FindingSink {
    /// A rule reported an issue.
    fn report(&mut self, finding: Finding);

    /// A rule pass over one declaration faulted.
    fn check_failed(&mut self, failure: CheckFailure);
}

/// Findings and failures collected from a scan, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub failures: Vec<CheckFailure>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.failures.is_empty()
    }

    /// Render findings for output, resolving file paths through `store`.
    pub fn finding_outputs(&self, store: &FactsStore) -> Vec<FindingOutput> {
        self.findings.iter().map(|f| f.to_output(store)).collect()
    }

    /// Render failures for output, resolving file paths through `store`.
    pub fn failure_outputs(&self, store: &FactsStore) -> Vec<FailureOutput> {
        self.failures.iter().map(|f| f.to_output(store)).collect()
    }

    /// Build a single-snapshot check response.
    pub fn to_response(&self, store: &FactsStore) -> CheckResponse {
        CheckResponse::new(
            1,
            self.finding_outputs(store),
            self.failure_outputs(store),
        )
    }
}

impl FindingSink for ScanReport {
    fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    fn check_failed(&mut self, failure: CheckFailure) {
        self.failures.push(failure);
    }
}

/// Run `rules` over every class declaration of `unit`.
pub fn scan_unit<S: FindingSink + ?Sized>(
    model: &dyn SymbolQuery,
    unit: &CompilationUnit,
    rules: &[Box<dyn Rule>],
    sink: &mut S,
) {
    let ctx = RuleContext {
        model,
        file_id: unit.file_id,
    };
    let classes = ClassCollector::collect(unit);
    debug!(file = %unit.file_id, classes = classes.len(), "scanning unit");

    for class in classes {
        for rule in rules {
            if !rule.nodes_to_visit().contains(&class.kind) {
                continue;
            }
            match rule.visit_node(&ctx, class) {
                Ok(findings) => {
                    for finding in findings {
                        sink.report(finding);
                    }
                }
                Err(error) => {
                    warn!(
                        rule = rule.key(),
                        file = %unit.file_id,
                        class = class.display_name(),
                        %error,
                        "rule check failed"
                    );
                    sink.check_failed(CheckFailure {
                        rule_key: rule.key(),
                        file_id: unit.file_id,
                        declaration: class.display_name().to_string(),
                        error,
                    });
                }
            }
        }
    }
}

/// Run `rules` over every unit of a snapshot.
pub fn scan_snapshot(snapshot: &Snapshot, rules: &[Box<dyn Rule>]) -> ScanReport {
    let mut report = ScanReport::new();
    for unit in &snapshot.units {
        scan_unit(&snapshot.store, unit, rules, &mut report);
    }
    debug!(
        units = snapshot.units.len(),
        findings = report.findings.len(),
        failures = report.failures.len(),
        "scan complete"
    );
    report
}
