//! Immutable syntax tree and visitor framework for a Java-like language.
//!
//! - [`ast`]: the closed set of node variants, their category lattice and
//!   construction.
//! - [`visit`]: exact dispatch, fallback, depth-first and rewriting visitors.
//! - [`pretty`]: the labeled-tree dump.
//!
//! All per-variant code is generated from the table in [`for_each_node!`].

#[macro_use]
mod macros;

pub mod ast;
pub mod config;
pub mod content_hash;
pub mod diagnostics;
pub mod pretty;
pub mod source;
pub mod visit;

pub use ast::{Category, Node, NodeBuilder, NodeKind};
pub use diagnostics::{ConfigError, ConstructionError};
pub use source::{Position, SourceInfo};
