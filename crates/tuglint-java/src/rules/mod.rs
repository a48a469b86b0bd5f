// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rule trait, metadata and the rule registry.
//!
//! A rule subscribes to one or more declaration kinds via
//! [`Rule::nodes_to_visit`]. The engine hands it every matching
//! [`ClassTree`] of a unit, nested declarations included, one call per
//! declaration.

use std::fmt;

use tuglint_core::error::{CheckError, LintError};
use tuglint_core::output::RuleInfo;
use tuglint_core::query::SymbolQuery;
use tuglint_core::span::FileId;

use crate::finding::Finding;
use crate::tree::{ClassTree, TypeKind};

pub mod inner_class_super_call;

pub use inner_class_super_call::InnerClassSuperCall;

/// Issue priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Info => "info",
            Priority::Minor => "minor",
            Priority::Major => "major",
            Priority::Critical => "critical",
            Priority::Blocker => "blocker",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated cost of fixing one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    /// Same cost for every finding.
    Constant { minutes: u32 },
}

impl Remediation {
    /// Cost in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Remediation::Constant { minutes } => *minutes,
        }
    }
}

/// Static description of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMetadata {
    /// Stable rule key (e.g. `S2388`).
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub priority: Priority,
    pub activated_by_default: bool,
    pub remediation: Remediation,
}

impl RuleMetadata {
    /// Render for the `rules` command.
    pub fn to_info(&self) -> RuleInfo {
        RuleInfo {
            key: self.key.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            priority: self.priority.as_str().to_string(),
            activated_by_default: self.activated_by_default,
            remediation_minutes: self.remediation.minutes(),
        }
    }
}

/// What a rule sees while checking one declaration.
#[derive(Clone, Copy)]
pub struct RuleContext<'m> {
    /// The resolved model.
    pub model: &'m dyn SymbolQuery,
    /// File the declaration belongs to.
    pub file_id: FileId,
}

/// A check over class declarations.
pub trait Rule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;

    /// Declaration kinds this rule wants to see.
    fn nodes_to_visit(&self) -> &[TypeKind];

    /// Check one declaration.
    ///
    /// An `Err` means the model is malformed around this declaration. It
    /// affects this call only.
    fn visit_node(
        &self,
        ctx: &RuleContext<'_>,
        tree: &ClassTree,
    ) -> Result<Vec<Finding>, CheckError>;

    /// Stable rule key.
    fn key(&self) -> &'static str {
        self.metadata().key
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Every registered rule, in key order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(InnerClassSuperCall::new())]
}

/// Rules activated by default.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .filter(|r| r.metadata().activated_by_default)
        .collect()
}

/// Rules selected by key, in the order given. Duplicates are dropped.
pub fn rules_for(keys: &[String]) -> Result<Vec<Box<dyn Rule>>, LintError> {
    let mut available = all_rules();
    let mut selected: Vec<Box<dyn Rule>> = Vec::new();
    for key in keys {
        if selected.iter().any(|r| r.key() == key.as_str()) {
            continue;
        }
        let position = available
            .iter()
            .position(|r| r.key() == key.as_str())
            .ok_or_else(|| LintError::UnknownRule { key: key.clone() })?;
        selected.push(available.remove(position));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_inner_class_rule() {
        let keys: Vec<_> = all_rules().iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["S2388"]);
        assert_eq!(default_rules().len(), 1);
    }

    #[test]
    fn rules_for_selects_and_dedups() {
        let keys = vec!["S2388".to_string(), "S2388".to_string()];
        let rules = rules_for(&keys).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].key(), "S2388");
    }

    #[test]
    fn rules_for_rejects_unknown_key() {
        let err = rules_for(&["S9999".to_string()]).err().unwrap();
        assert!(matches!(err, LintError::UnknownRule { ref key } if key == "S9999"));
    }

    #[test]
    fn metadata_renders_to_info() {
        let rule = InnerClassSuperCall::new();
        let info = rule.metadata().to_info();
        assert_eq!(info.key, "S2388");
        assert_eq!(
            info.name,
            "Inner class calls to super class methods should be unambiguous"
        );
        assert_eq!(info.tags, vec!["pitfall".to_string()]);
        assert_eq!(info.priority, "major");
        assert!(info.activated_by_default);
        assert_eq!(info.remediation_minutes, 5);
    }
}
