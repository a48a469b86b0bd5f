// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Java rule checks over a resolved tree model.
//!
//! The input is a snapshot produced by an external Java front end: a facts
//! model (symbols, owners, inheritance) plus one resolved tree per
//! compilation unit. This crate provides:
//!
//! - [`tree`]: the tagged-union tree model
//! - [`visitor`]: a [`Visitor`](visitor::Visitor) trait and source-order walk functions
//! - [`rules`]: the [`Rule`](rules::Rule) trait, metadata and registry
//! - [`engine`]: dispatch of class declarations to subscribed rules
//! - [`snapshot`]: loading snapshot documents from JSON
//!
//! # Example
//!
//! ```ignore
//! use tuglint_java::{engine, rules, snapshot};
//!
//! let snapshot = snapshot::load_snapshot(path)?;
//! let report = engine::scan_snapshot(&snapshot, &rules::all_rules());
//! for finding in &report.findings {
//!     println!("{} {}", finding.rule_key, finding.message);
//! }
//! ```

pub mod engine;
pub mod finding;
pub mod rules;
pub mod snapshot;
pub mod tree;
pub mod visitor;

pub use engine::{scan_snapshot, scan_unit, FindingSink, ScanReport};
pub use finding::{CheckFailure, Finding};
pub use rules::{all_rules, rules_for, Rule, RuleMetadata};
pub use snapshot::{load_snapshot, parse_snapshot, Snapshot};
