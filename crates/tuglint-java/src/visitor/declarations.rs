// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! ClassCollector visitor for gathering class declarations.
//!
//! Collects member, local and anonymous class bodies as well as top-level
//! types, in the order a pre-order walk meets them. Each declaration is
//! returned once, so a rule run over the result sees every class exactly
//! once.

use super::dispatch::walk_compilation_unit;
use super::traits::{VisitResult, Visitor};
use crate::tree::{ClassTree, CompilationUnit};

/// A visitor that collects every [`ClassTree`] in a compilation unit.
#[derive(Default)]
pub struct ClassCollector<'a> {
    classes: Vec<&'a ClassTree>,
}

impl<'a> ClassCollector<'a> {
    /// Create a new ClassCollector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect all class declarations from a compilation unit, pre-order.
    pub fn collect(unit: &'a CompilationUnit) -> Vec<&'a ClassTree> {
        let mut collector = ClassCollector::new();
        walk_compilation_unit(&mut collector, unit);
        collector.classes
    }
}

impl<'a> Visitor<'a> for ClassCollector<'a> {
    fn visit_class(&mut self, node: &'a ClassTree) -> VisitResult {
        self.classes.push(node);
        VisitResult::Continue
    }
}
