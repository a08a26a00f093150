use std::path::PathBuf;

use thiserror::Error;

use crate::ast::{FieldType, NodeKind};

/// Failure to assemble a node from named fields.
///
/// Raised by [`crate::ast::NodeBuilder::build`]; the typed constructors cannot
/// fail because the compiler already rules out absent fields there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("cannot construct {}: required field `{field}` is absent", .variant.name())]
    MissingField { variant: NodeKind, field: &'static str },

    #[error("cannot construct {}: field `{field}` expects {expected}, found {found}", .variant.name())]
    FieldType {
        variant: NodeKind,
        field: &'static str,
        expected: FieldType,
        found: FieldType,
    },

    #[error("cannot construct {}: no field named `{field}`", .variant.name())]
    UnknownField { variant: NodeKind, field: String },
}

impl ConstructionError {
    pub fn missing(variant: NodeKind, field: &'static str) -> Self {
        Self::MissingField { variant, field }
    }

    pub fn field_type(
        variant: NodeKind,
        field: &'static str,
        expected: FieldType,
        found: FieldType,
    ) -> Self {
        Self::FieldType { variant, field, expected, found }
    }

    pub fn unknown(variant: NodeKind, field: impl Into<String>) -> Self {
        Self::UnknownField { variant, field: field.into() }
    }

    /// The variant that failed to construct.
    pub fn variant(&self) -> NodeKind {
        match self {
            Self::MissingField { variant, .. }
            | Self::FieldType { variant, .. }
            | Self::UnknownField { variant, .. } => *variant,
        }
    }

    /// The offending field name.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. } | Self::FieldType { field, .. } => field,
            Self::UnknownField { field, .. } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}
