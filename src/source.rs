use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Line/column position in a source file. Both are 1-based; `0` means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Where a node came from.
///
/// The tree never inspects this value: constructors store it, the rewrite
/// engine forwards it, and equality and hashing ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file: Option<Arc<str>>,
    pub start: Position,
    pub end: Position,
}

impl SourceInfo {
    pub fn new(file: impl Into<Arc<str>>, start: Position, end: Position) -> Self {
        Self { file: Some(file.into()), start, end }
    }

    pub fn anonymous(start: Position, end: Position) -> Self {
        Self { file: None, start, end }
    }

    /// Provenance for synthesized nodes that have no source text.
    pub fn dummy() -> Self {
        Self::default()
    }

    pub fn is_dummy(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("<unknown>");
        write!(
            f,
            "{file}:{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
