//! Per-constant accessors and the static record behind them.
//!
//! A constant is a zero-sized type implementing [`PhysicalConstant`]. Its
//! value and uncertainty are stored once as canonical `f64` literals and read
//! through the generic accessors in whichever [`Representation`] the caller
//! asks for:
//!
//! ```
//! use codata_core::PhysicalConstant;
//!
//! mod table {
//!     codata_core::codata_table! {
//!         revision: 2006;
//!
//!         electron_mag_mom: Narrow {
//!             name: "electron mag. mom.",
//!             value: -9.28476377e-24,
//!             uncertainty: 2.3e-31,
//!             unit: "J T^-1",
//!         }
//!     }
//! }
//!
//! use table::electron_mag_mom;
//!
//! let mu: f64 = electron_mag_mom::value();
//! assert_eq!(mu, -9.28476377e-24);
//! // Relative precision is a magnitude even for negative values.
//! assert!(electron_mag_mom::precision::<f32>() > 0.0);
//! assert_eq!(<electron_mag_mom as PhysicalConstant>::NAME, "electron mag. mom.");
//! ```
//!
//! [`ConstantRecord`] is the same data with the type parameter erased, for
//! iterating a revision's `CATALOG` at runtime.

use core::fmt;

use crate::repr::{Covers, RangeClass, Representation};

#[cfg(feature = "serde")]
mod serde_;

/// A CODATA constant: a named, immutable (value, uncertainty) pair.
///
/// Implemented by the unit structs [`codata_table!`](crate::codata_table)
/// generates. The accessors are total: there is no input to reject, and the
/// range class keeps representations that would overflow out of reach at
/// compile time.
pub trait PhysicalConstant {
    /// CODATA English name, e.g. `"electron mass"`.
    const NAME: &'static str;
    /// Normalized identifier, e.g. `"electron_mass"`.
    const IDENT: &'static str;
    /// Unit string as published. Empty for dimensionless constants.
    const UNIT: &'static str;
    /// Canonical recommended value.
    const VALUE: f64;
    /// Canonical standard uncertainty. Zero for exact constants.
    const UNCERTAINTY: f64;
    /// CODATA revision year the table belongs to.
    const REVISION: u16;

    type Range: RangeClass;

    const RECORD: ConstantRecord = ConstantRecord {
        name: Self::NAME,
        ident: Self::IDENT,
        value: Self::VALUE,
        uncertainty: Self::UNCERTAINTY,
        unit: Self::UNIT,
        single_precision: <Self::Range as RangeClass>::SINGLE_PRECISION,
    };

    /// Recommended value rounded to `T`.
    #[inline]
    fn value<T: Covers<Self::Range>>() -> T {
        T::from_f64(Self::VALUE)
    }

    /// Standard uncertainty rounded to `T`.
    #[inline]
    fn uncertainty<T: Covers<Self::Range>>() -> T {
        T::from_f64(Self::UNCERTAINTY)
    }

    /// `|uncertainty / value|`, evaluated in `T`.
    #[inline]
    fn precision<T: Covers<Self::Range>>() -> T {
        (Self::uncertainty::<T>() / Self::value::<T>()).magnitude()
    }

    fn record() -> ConstantRecord {
        Self::RECORD
    }
}

/// Type-erased view of one table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRecord {
    pub name: &'static str,
    pub ident: &'static str,
    pub value: f64,
    pub uncertainty: f64,
    pub unit: &'static str,
    /// Whether the constant is classed [`Narrow`](crate::repr::Narrow).
    pub single_precision: bool,
}

impl ConstantRecord {
    /// Relative precision in double precision.
    #[inline]
    pub fn precision(&self) -> f64 {
        libm::fabs(self.uncertainty / self.value)
    }

    /// Exact by definition (or no uncertainty assigned).
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.uncertainty == 0.0
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_empty()
    }

    /// Value rounded to `T`, or `None` when `T` cannot hold this constant.
    pub fn value_as<T: Representation>(&self) -> Option<T> {
        self.read_as(self.value)
    }

    /// Uncertainty rounded to `T`, or `None` when `T` cannot hold this constant.
    pub fn uncertainty_as<T: Representation>(&self) -> Option<T> {
        self.read_as(self.uncertainty)
    }

    fn read_as<T: Representation>(&self, canonical: f64) -> Option<T> {
        let v = T::from_f64(self.value);
        let u = T::from_f64(self.uncertainty);
        if v.is_finite() && u.is_finite() && (u / v).is_finite() {
            Some(T::from_f64(canonical))
        } else {
            None
        }
    }
}

impl fmt::Display for ConstantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ({:e} ± {:e})", self.name, self.value, self.uncertainty)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}
