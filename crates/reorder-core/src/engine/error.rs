use thiserror::Error;

use crate::core::models::document::SpliceError;
use crate::core::models::order::OrderError;
use crate::core::models::section::SectionKind;
use crate::core::models::symbols::TypeId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed '{section}' section at line {line}: {reason}")]
    MalformedSection {
        section: SectionKind,
        line: usize,
        reason: String,
    },

    #[error(
        "Requested order does not match the type symbols in the file (in file only: [{}]; in order only: [{}])",
        .in_file_only.join(", "),
        .in_order_only.join(", ")
    )]
    OrderMismatch {
        in_file_only: Vec<String>,
        in_order_only: Vec<String>,
    },

    #[error("Symbol '{symbol}' is assigned to more than one type id ({first} and {second})")]
    DuplicateSymbol {
        symbol: String,
        first: TypeId,
        second: TypeId,
    },

    #[error("Invalid type order: {0}")]
    InvalidOrder(#[from] OrderError),

    #[error(
        "'{section}' section references type id {type_id} at line {line}, which the mapping does not cover"
    )]
    UnmappedTypeId {
        section: SectionKind,
        line: usize,
        type_id: TypeId,
    },

    #[error("Cannot auto-detect the type column{}; pass it explicitly", .line.map(|l| format!(" from line {l}")).unwrap_or_default())]
    ColumnNotFound { line: Option<usize> },

    #[error("Required section '{0}' not found")]
    MissingRequiredSection(SectionKind),

    #[error("No mass is recorded for symbol '{symbol}' (new type {new_id})")]
    MissingMass { symbol: String, new_id: TypeId },

    #[error("Header declares {declared} atom types but the requested order has {requested}")]
    TypeCountMismatch { declared: usize, requested: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl From<SpliceError> for EngineError {
    fn from(e: SpliceError) -> Self {
        EngineError::Internal(e.to_string())
    }
}

impl EngineError {
    pub(crate) fn malformed(section: SectionKind, index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSection {
            section,
            line: index + 1,
            reason: reason.into(),
        }
    }
}
