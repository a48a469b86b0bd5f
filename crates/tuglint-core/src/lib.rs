//! Core infrastructure for tuglint.
//!
//! This crate provides the language-agnostic pieces every rule builds on:
//! - Facts store: the resolved symbol table and type hierarchy of a snapshot
//! - Query traits (`TypeQuery`, `SymbolQuery`) through which rules read the model
//! - Error types and error codes
//! - JSON output types for CLI responses
//! - Layered configuration resolution
//! - Byte spans and file identifiers

pub mod config;
pub mod error;
pub mod facts;
pub mod output;
pub mod query;
pub mod span;
