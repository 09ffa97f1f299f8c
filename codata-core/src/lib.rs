//! Building blocks for CODATA physical constant tables.
//!
//! `codata-core` holds everything a revision table needs except the data:
//! the numeric representations a constant can be read in, the accessor trait,
//! the type-erased record, validation, and the macro that turns a block of
//! entries into typed constants. The tables themselves live in the `codata`
//! crate, one module per revision.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`repr`] | [`Representation`] (`f32`, `f64`, [`Extended`]), range classes, [`Covers`] |
//! | [`constant`] | [`PhysicalConstant`] trait and [`ConstantRecord`] |
//! | [`table`] | The [`codata_table!`] macro |
//! | [`validate`] | Data-entry checks for records and whole catalogs |
//! | [`errors`] | [`CodataError`] and [`CodataResult`] |
//! | [`test_helpers`] | ULP distance assertions |
//!
//! # Accessor semantics
//!
//! For a constant `C` and a representation `T`:
//!
//! - `C::value::<T>()` is the canonical double literal rounded to `T`.
//! - `C::uncertainty::<T>()` likewise.
//! - `C::precision::<T>()` is `|uncertainty / value|` computed in `T`. It is
//!   never negative, including for negative values and for exact constants
//!   whose uncertainty is zero.
//!
//! All three are pure and allocation-free.
//!
//! # Features
//!
//! - **`extended`** (default): double-double [`Extended`] representation via `twofloat`.
//! - **`serde`**: `Serialize` for [`ConstantRecord`].

pub mod constant;
pub mod errors;
pub mod repr;
pub mod table;
pub mod validate;

pub use constant::{ConstantRecord, PhysicalConstant};
pub use errors::{CodataError, CodataResult, NumericErrorKind};
#[cfg(feature = "extended")]
pub use repr::Extended;
pub use repr::{Covers, Narrow, RangeClass, Representation, Wide};

pub mod test_helpers;
