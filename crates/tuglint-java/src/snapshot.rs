// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Snapshot documents: the resolved model plus trees, as JSON.
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "files": [ { "file_id": 0, "path": "src/Outer.java" } ],
//!   "symbols": [ { "symbol_id": 0, "kind": "class", "name": "Outer",
//!                  "decl_file_id": 0, "decl_span": { "start": 6, "end": 11 } } ],
//!   "inheritance": [ { "child_id": 2, "parent_id": 1 } ],
//!   "units": [ { "file_id": 0, "types": [ ... ] } ]
//! }
//! ```
//!
//! References between tables are not checked on load. A dangling symbol or
//! container id surfaces when a rule needs it, as a check failure scoped to
//! one declaration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tuglint_core::error::LintError;
use tuglint_core::facts::{
    FactsSnapshot, FactsStore, File, InheritanceInfo, Symbol, FACTS_SCHEMA_VERSION,
};

use crate::tree::CompilationUnit;

/// Serialized snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub schema_version: u32,
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub inheritance: Vec<InheritanceInfo>,
    #[serde(default)]
    pub units: Vec<CompilationUnit>,
}

/// A loaded snapshot: indexed model plus trees.
#[derive(Debug)]
pub struct Snapshot {
    pub store: FactsStore,
    pub units: Vec<CompilationUnit>,
}

impl Snapshot {
    /// Build a snapshot from a decoded document, rebuilding indexes.
    pub fn from_document(document: SnapshotDocument) -> Self {
        let store = FactsStore::from_snapshot(FactsSnapshot {
            files: document.files,
            symbols: document.symbols,
            inheritance: document.inheritance,
        });
        Snapshot {
            store,
            units: document.units,
        }
    }

    /// Serialize back into a document.
    pub fn to_document(&self) -> SnapshotDocument {
        let facts = self.store.to_snapshot();
        SnapshotDocument {
            schema_version: FACTS_SCHEMA_VERSION,
            files: facts.files,
            symbols: facts.symbols,
            inheritance: facts.inheritance,
            units: self.units.clone(),
        }
    }
}

/// Parse a snapshot from JSON text. `origin` names the source in errors.
pub fn parse_snapshot(origin: &str, json: &str) -> Result<Snapshot, LintError> {
    let document: SnapshotDocument =
        serde_json::from_str(json).map_err(|e| LintError::malformed(origin, e.to_string()))?;
    if document.schema_version != FACTS_SCHEMA_VERSION {
        return Err(LintError::malformed(
            origin,
            format!(
                "unsupported schema version {} (expected {})",
                document.schema_version, FACTS_SCHEMA_VERSION
            ),
        ));
    }
    debug!(
        origin,
        files = document.files.len(),
        symbols = document.symbols.len(),
        units = document.units.len(),
        "parsed snapshot"
    );
    Ok(Snapshot::from_document(document))
}

/// Load a snapshot from a file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, LintError> {
    let origin = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LintError::file_not_found(origin.clone()),
        _ => LintError::malformed(origin.clone(), e.to_string()),
    })?;
    parse_snapshot(&origin, &json)
}
