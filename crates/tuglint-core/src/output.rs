//! JSON output types and serialization for CLI responses.
//!
//! ## Design Principles
//!
//! 1. **Status first:** Every response has `status` as first field
//! 2. **Deterministic:** Same input -> same output (field order, array ordering)
//! 3. **Versioned:** Schema version in response enables forward compatibility

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::{LintError, OutputErrorCode};
use crate::span::Span;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Finding Types
// ============================================================================

/// A single rule finding as rendered in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingOutput {
    /// Rule key (e.g. `S2388`).
    pub rule: String,
    /// Path of the file the finding is in.
    pub file: String,
    /// Byte span of the offending call.
    pub span: Span,
    /// Name of the called method.
    pub method: String,
    /// Human-readable message.
    pub message: String,
}

/// A rule pass that could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureOutput {
    /// Rule key.
    pub rule: String,
    /// Path of the file holding the declaration.
    pub file: String,
    /// Name of the declaration being checked.
    pub declaration: String,
    /// Why the pass failed.
    pub message: String,
}

/// Aggregate counts for a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub findings_count: usize,
    pub failures_count: usize,
    /// Findings per rule key.
    pub by_rule: BTreeMap<String, usize>,
}

impl CheckSummary {
    /// Build a summary from findings and failures.
    pub fn from_results(findings: &[FindingOutput], failures: &[FailureOutput]) -> Self {
        let mut by_rule = BTreeMap::new();
        for finding in findings {
            *by_rule.entry(finding.rule.clone()).or_insert(0) += 1;
        }
        CheckSummary {
            findings_count: findings.len(),
            failures_count: failures.len(),
            by_rule,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version.
    pub schema_version: String,
    /// Number of snapshot files scanned.
    pub files_scanned: usize,
    /// Findings, ordered by file then span.
    pub findings: Vec<FindingOutput>,
    /// Rule passes that faulted.
    pub failures: Vec<FailureOutput>,
    pub summary: CheckSummary,
}

impl CheckResponse {
    /// Create a check response. Findings are sorted for deterministic output.
    pub fn new(
        files_scanned: usize,
        mut findings: Vec<FindingOutput>,
        failures: Vec<FailureOutput>,
    ) -> Self {
        findings.sort_by(|a, b| {
            (&a.file, a.span.start, a.span.end, &a.rule).cmp(&(
                &b.file,
                b.span.start,
                b.span.end,
                &b.rule,
            ))
        });
        let summary = CheckSummary::from_results(&findings, &failures);
        CheckResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            files_scanned,
            findings,
            failures,
            summary,
        }
    }
}

/// Rule description for the `rules` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub key: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Priority label (e.g. "major").
    pub priority: String,
    pub activated_by_default: bool,
    /// Constant remediation cost in minutes.
    pub remediation_minutes: u32,
}

/// Response for the `rules` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version.
    pub schema_version: String,
    pub rules: Vec<RuleInfo>,
}

impl RulesResponse {
    /// Create a rules response.
    pub fn new(rules: Vec<RuleInfo>) -> Self {
        RulesResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            rules,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error information for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
    /// Additional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version.
    pub schema_version: String,
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response.
    pub fn new(code: OutputErrorCode, message: impl Into<String>) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo {
                code: code.code(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an error response from a [`LintError`].
    pub fn from_error(err: &LintError) -> Self {
        let mut response = ErrorResponse::new(err.error_code(), err.to_string());
        if let LintError::InvalidArguments {
            details: Some(details),
            ..
        } = err
        {
            response.error.details = Some(details.clone());
        }
        response
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Emit a response as compact JSON (single line) to a writer.
pub fn emit_response_compact<T: Serialize>(
    response: &T,
    writer: &mut impl Write,
) -> io::Result<()> {
    let json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Emit findings and failures as plain text, one per line.
///
/// Format: `path:[start, end): KEY message`.
pub fn emit_text(response: &CheckResponse, writer: &mut impl Write) -> io::Result<()> {
    for finding in &response.findings {
        writeln!(
            writer,
            "{}:{}: {} {}",
            finding.file, finding.span, finding.rule, finding.message
        )?;
    }
    for failure in &response.failures {
        writeln!(
            writer,
            "{}: {} check failed on '{}': {}",
            failure.file, failure.rule, failure.declaration, failure.message
        )?;
    }
    writeln!(
        writer,
        "{} finding(s), {} failure(s) in {} file(s)",
        response.summary.findings_count, response.summary.failures_count, response.files_scanned
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(file: &str, start: u64, rule: &str) -> FindingOutput {
        FindingOutput {
            rule: rule.to_string(),
            file: file.to_string(),
            span: Span::new(start, start + 3),
            method: "foo".to_string(),
            message: "Prefix this call to \"foo\" with \"super.\".".to_string(),
        }
    }

    mod check_response {
        use super::*;

        #[test]
        fn findings_are_sorted_by_file_then_offset() {
            let response = CheckResponse::new(
                2,
                vec![
                    finding("b.java", 5, "S2388"),
                    finding("a.java", 40, "S2388"),
                    finding("a.java", 10, "S2388"),
                ],
                vec![],
            );
            let order: Vec<_> = response
                .findings
                .iter()
                .map(|f| (f.file.as_str(), f.span.start))
                .collect();
            assert_eq!(order, vec![("a.java", 10), ("a.java", 40), ("b.java", 5)]);
        }

        #[test]
        fn summary_counts_by_rule() {
            let response = CheckResponse::new(
                1,
                vec![finding("a.java", 1, "S2388"), finding("a.java", 9, "S2388")],
                vec![FailureOutput {
                    rule: "S2388".to_string(),
                    file: "a.java".to_string(),
                    declaration: "Inner".to_string(),
                    message: "broken".to_string(),
                }],
            );
            assert_eq!(response.summary.findings_count, 2);
            assert_eq!(response.summary.failures_count, 1);
            assert_eq!(response.summary.by_rule.get("S2388"), Some(&2));
        }

        #[test]
        fn status_is_first_field() {
            let response = CheckResponse::new(0, vec![], vec![]);
            let json = serde_json::to_string(&response).unwrap();
            assert!(json.starts_with("{\"status\":\"ok\""));
        }
    }

    mod error_response {
        use super::*;

        #[test]
        fn from_error_carries_code_and_details() {
            let err = LintError::invalid_args_with_details(
                "no inputs",
                serde_json::json!({"paths": []}),
            );
            let response = ErrorResponse::from_error(&err);
            assert_eq!(response.status, "error");
            assert_eq!(response.error.code, 2);
            assert_eq!(response.error.message, "invalid arguments: no inputs");
            assert!(response.error.details.is_some());
        }

        #[test]
        fn details_absent_when_none() {
            let response = ErrorResponse::from_error(&LintError::file_not_found("x.json"));
            let json = serde_json::to_value(&response).unwrap();
            assert_eq!(json["error"]["code"], 3);
            assert!(json["error"].get("details").is_none());
        }
    }

    mod emit {
        use super::*;

        #[test]
        fn emit_response_produces_valid_json() {
            let response = RulesResponse::new(vec![]);
            let mut output = Vec::new();
            emit_response(&response, &mut output).unwrap();
            let parsed: serde_json::Value =
                serde_json::from_str(&String::from_utf8(output).unwrap()).unwrap();
            assert_eq!(parsed["schema_version"], "1");
        }

        #[test]
        fn emit_response_is_deterministic() {
            let make = || {
                CheckResponse::new(
                    1,
                    vec![finding("a.java", 9, "S2388"), finding("a.java", 2, "S2388")],
                    vec![],
                )
            };
            let mut first = Vec::new();
            let mut second = Vec::new();
            emit_response(&make(), &mut first).unwrap();
            emit_response(&make(), &mut second).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn compact_is_single_line() {
            let mut output = Vec::new();
            emit_response_compact(&CheckResponse::new(0, vec![], vec![]), &mut output).unwrap();
            let text = String::from_utf8(output).unwrap();
            assert_eq!(text.lines().count(), 1);
        }

        #[test]
        fn text_lists_findings_and_summary() {
            let response = CheckResponse::new(1, vec![finding("a.java", 2, "S2388")], vec![]);
            let mut output = Vec::new();
            emit_text(&response, &mut output).unwrap();
            let text = String::from_utf8(output).unwrap();
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(
                lines[0],
                "a.java:[2, 5): S2388 Prefix this call to \"foo\" with \"super.\"."
            );
            assert_eq!(lines[1], "1 finding(s), 0 failure(s) in 1 file(s)");
        }
    }
}
