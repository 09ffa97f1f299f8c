//! CODATA recommended values of the fundamental physical constants.
//!
//! Each CODATA revision is its own module. A constant is a unit struct with
//! three generic accessors, read in whichever floating-point representation
//! the caller needs:
//!
//! ```
//! use codata::codata_2006::{electron_mag_mom, electron_mass};
//!
//! let m: f64 = electron_mass::value();
//! let dm: f64 = electron_mass::uncertainty();
//! assert_eq!((m, dm), (9.10938215e-31, 4.5e-38));
//!
//! // Relative precision, never negative.
//! let p = electron_mag_mom::precision::<f64>();
//! assert!(p > 2.47e-8 && p < 2.48e-8);
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`codata_2006`] | CODATA 2006 table (326 constants) |
//! | [`codata_2002`] | CODATA 2002 table (partial, 58 constants) |
//! | [`revision`] | [`Revision`]: runtime catalog lookup and validation |
//!
//! Revisions are independent. A constant's value, and sometimes its name,
//! changes between adjustments, so code pins the module of the revision it
//! was validated against. There is no "latest" alias.
//!
//! # Representations
//!
//! `f32`, `f64` and [`Extended`] (double-double, feature `extended`). The
//! canonical literal is a double and is rounded to the requested type. The
//! few constants outside the single-precision range have no `f32` accessor;
//! see [`codata_core::repr`].
//!
//! # Features
//!
//! - **`extended`** (default): the [`Extended`] representation.
//! - **`serde`**: `Serialize` for [`ConstantRecord`].
//! - **`cli`**: the `codata` binary for looking constants up from a shell.

pub mod codata_2002;
pub mod codata_2006;
pub mod revision;

pub use codata_core::{
    CodataError, CodataResult, ConstantRecord, Covers, Narrow, PhysicalConstant, RangeClass,
    Representation, Wide,
};
#[cfg(feature = "extended")]
pub use codata_core::Extended;
pub use revision::Revision;
