// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rule results: findings and failed check passes.

use tuglint_core::error::CheckError;
use tuglint_core::facts::FactsStore;
use tuglint_core::output::{FailureOutput, FindingOutput};
use tuglint_core::span::{FileId, Span};

/// One reported issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule_key: &'static str,
    pub file_id: FileId,
    /// Span of the offending node.
    pub span: Span,
    /// Name of the called method.
    pub method_name: String,
    pub message: String,
}

impl Finding {
    /// Render for output, resolving the file path through `store`.
    pub fn to_output(&self, store: &FactsStore) -> FindingOutput {
        FindingOutput {
            rule: self.rule_key.to_string(),
            file: file_path(store, self.file_id),
            span: self.span,
            method: self.method_name.clone(),
            message: self.message.clone(),
        }
    }
}

/// A rule pass over one declaration that faulted on malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub rule_key: &'static str,
    pub file_id: FileId,
    /// Display name of the declaration being checked.
    pub declaration: String,
    pub error: CheckError,
}

impl CheckFailure {
    /// Render for output, resolving the file path through `store`.
    pub fn to_output(&self, store: &FactsStore) -> FailureOutput {
        FailureOutput {
            rule: self.rule_key.to_string(),
            file: file_path(store, self.file_id),
            declaration: self.declaration.clone(),
            message: self.error.to_string(),
        }
    }
}

/// Path of a file, or its id when the snapshot does not list it.
fn file_path(store: &FactsStore, file_id: FileId) -> String {
    store
        .file(file_id)
        .map(|f| f.path.clone())
        .unwrap_or_else(|| file_id.to_string())
}
