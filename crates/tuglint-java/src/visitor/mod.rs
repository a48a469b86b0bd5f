// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for traversing the resolved tree.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order (left-to-right, top-to-bottom)
//!
//! # Visitor Pattern
//!
//! ```ignore
//! use tuglint_java::visitor::{walk_compilation_unit, Visitor, VisitResult};
//!
//! struct CallCounter {
//!     count: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CallCounter {
//!     fn visit_method_invocation(&mut self, _node: &'a MethodInvocation) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::Continue
//!     }
//! }
//! ```
//!
//! # Collectors
//!
//! - [`ClassCollector`]: every class declaration of a unit, pre-order
//! - [`InvocationCollector`]: unqualified call sites in one class body

mod declarations;
mod dispatch;
mod invocation;
mod traits;

pub use declarations::ClassCollector;
pub use dispatch::*;
pub use invocation::{InvocationCollector, InvocationSite};
pub use traits::{VisitResult, Visitor};
