//! Shared test support utilities.
//!
//! Builders for resolved models and trees, so scenarios read close to the
//! Java source they stand for.

pub mod builder;
pub mod trees;
