//! Table validation.
//!
//! Catches data-entry mistakes in a revision table: non-finite literals, a
//! zero value (undefined relative precision), a negative uncertainty, a range
//! class that does not match what single precision can actually hold, and
//! names or identifiers that collide.

use std::collections::HashSet;

use crate::constant::ConstantRecord;
use crate::repr::fits_single_precision;
use crate::{CodataError, CodataResult, NumericErrorKind};

pub fn validate_record(record: &ConstantRecord) -> CodataResult<()> {
    let fail = |kind: NumericErrorKind, reason: &str| {
        tracing::warn!(name = record.name, ?kind, "{}", reason);
        Err(CodataError::invalid_record(record.name, kind, reason))
    };

    if !record.value.is_finite() {
        return fail(NumericErrorKind::NotFinite, "value not finite");
    }
    if !record.uncertainty.is_finite() {
        return fail(NumericErrorKind::NotFinite, "uncertainty not finite");
    }
    if record.value == 0.0 {
        return fail(NumericErrorKind::ZeroValue, "value is zero");
    }
    if record.uncertainty.is_sign_negative() {
        return fail(
            NumericErrorKind::NegativeUncertainty,
            "uncertainty is negative",
        );
    }
    if !record.precision().is_finite() {
        return fail(NumericErrorKind::NotFinite, "precision not finite");
    }
    if !is_identifier(record.ident) {
        let reason = format!("'{}' is not an identifier", record.ident);
        return fail(NumericErrorKind::InvalidIdentifier, reason.as_str());
    }

    let fits = fits_single_precision(record.value, record.uncertainty);
    if record.single_precision && !fits {
        return fail(
            NumericErrorKind::RangeMismatch,
            "classed Narrow but leaves the f32 range",
        );
    }
    if !record.single_precision && fits {
        return fail(
            NumericErrorKind::RangeMismatch,
            "classed Wide but fits in f32",
        );
    }

    Ok(())
}

/// Validates every record and checks names and identifiers are unique.
pub fn validate_catalog(records: &[ConstantRecord]) -> CodataResult<()> {
    let mut names = HashSet::with_capacity(records.len());
    let mut idents = HashSet::with_capacity(records.len());

    for record in records {
        validate_record(record)?;
        if !names.insert(record.name) {
            tracing::warn!(name = record.name, "duplicate constant name");
            return Err(CodataError::duplicate_entry("name", record.name));
        }
        if !idents.insert(record.ident) {
            tracing::warn!(ident = record.ident, "duplicate identifier");
            return Err(CodataError::duplicate_entry("identifier", record.ident));
        }
    }

    tracing::debug!(count = records.len(), "catalog valid");
    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`, excluding a lone underscore.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
