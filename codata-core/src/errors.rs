//! Error types for constant tables and catalog lookups.
//!
//! The per-constant accessors never fail. Errors only arise at the edges:
//! resolving a revision or a constant from a runtime string, and validating
//! a table for data-entry mistakes.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`UnknownRevision`](CodataError::UnknownRevision) | Parsing a revision name |
//! | [`UnknownConstant`](CodataError::UnknownConstant) | Catalog lookup by name |
//! | [`InvalidRecord`](CodataError::InvalidRecord) | [`validate_record`](crate::validate::validate_record) |
//! | [`DuplicateEntry`](CodataError::DuplicateEntry) | [`validate_catalog`](crate::validate::validate_catalog) |
//!
//! ```
//! use codata_core::{CodataError, NumericErrorKind};
//!
//! let err = CodataError::invalid_record("electron mass", NumericErrorKind::ZeroValue, "value is zero");
//! assert!(err.to_string().contains("electron mass"));
//! ```

use thiserror::Error;

/// Classification of numeric defects in a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericErrorKind {
    /// Value, uncertainty or precision is NaN or infinite.
    NotFinite,
    /// Value is zero, so the relative precision is undefined.
    ZeroValue,
    /// Uncertainty carries a negative sign.
    NegativeUncertainty,
    /// Identifier is not a valid Rust identifier.
    InvalidIdentifier,
    /// Range class disagrees with what single precision can hold.
    RangeMismatch,
}

#[derive(Error, Debug)]
pub enum CodataError {
    #[error("Unknown CODATA revision '{0}'")]
    UnknownRevision(String),

    #[error("No constant named '{name}' in {revision}")]
    UnknownConstant { revision: String, name: String },

    #[error("Invalid record '{name}' ({kind:?}): {message}")]
    InvalidRecord {
        name: String,
        kind: NumericErrorKind,
        message: String,
    },

    /// Two entries of one table share a name or identifier.
    #[error("Duplicate {field} '{value}' in table")]
    DuplicateEntry { field: &'static str, value: String },
}

/// Convenience alias for `Result<T, CodataError>`.
pub type CodataResult<T> = Result<T, CodataError>;

impl CodataError {
    pub fn unknown_revision(input: &str) -> Self {
        Self::UnknownRevision(input.to_string())
    }

    pub fn unknown_constant(revision: &str, name: &str) -> Self {
        Self::UnknownConstant {
            revision: revision.to_string(),
            name: name.to_string(),
        }
    }

    pub fn invalid_record(name: &str, kind: NumericErrorKind, reason: &str) -> Self {
        Self::InvalidRecord {
            name: name.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn duplicate_entry(field: &'static str, value: &str) -> Self {
        Self::DuplicateEntry {
            field,
            value: value.to_string(),
        }
    }

    /// Returns `true` when the error points at a defect in the table data
    /// itself rather than at caller input.
    pub fn is_data_defect(&self) -> bool {
        match self {
            Self::InvalidRecord { .. } | Self::DuplicateEntry { .. } => true,
            Self::UnknownRevision(_) | Self::UnknownConstant { .. } => false,
        }
    }
}
