//! Numeric representations a constant can be read in.
//!
//! Every constant is authored once as a canonical double-precision literal.
//! A [`Representation`] turns that literal into its own format by rounding
//! to the nearest representable value, the same conversion a plain
//! `literal as f32` performs.
//!
//! | Type | Format | Significand |
//! |------|--------|-------------|
//! | `f32` | IEEE-754 single | 24 bits |
//! | `f64` | IEEE-754 double | 53 bits |
//! | [`Extended`] | double-double (`twofloat`) | 106 bits |
//!
//! The extended format widens the canonical double exactly, so its value
//! and uncertainty equal the `f64` ones while the precision ratio is
//! evaluated with the wider significand.
//!
//! # Range classes
//!
//! A handful of constants (the kilogram-hertz relationship, the atomic unit of
//! 2nd hyperpolarizability, ...) overflow or flush to zero in single precision.
//! Each constant carries a range class, and [`Covers`] states which
//! representations admit it:
//!
//! | Class | `f32` | `f64` | `Extended` |
//! |-------|-------|-------|------------|
//! | [`Narrow`] | yes | yes | yes |
//! | [`Wide`] | no | yes | yes |
//!
//! Reading a [`Wide`] constant as `f32` is therefore a compile error rather
//! than a silent infinity.

use core::fmt::Debug;
use core::ops::Div;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    #[cfg(feature = "extended")]
    impl Sealed for super::Extended {}

    impl Sealed for super::Narrow {}
    impl Sealed for super::Wide {}
}

/// A floating-point format constants can be returned in.
///
/// Sealed: the supported set is fixed to `f32`, `f64` and [`Extended`].
pub trait Representation: sealed::Sealed + Copy + PartialEq + Debug + Div<Output = Self> {
    /// Short label used in diagnostics.
    const LABEL: &'static str;

    /// Rounds a canonical double to the nearest value of this format.
    fn from_f64(value: f64) -> Self;

    /// Absolute value. Clears the sign of a negative zero as well.
    fn magnitude(self) -> Self;

    fn is_finite(&self) -> bool;

    fn is_sign_negative(&self) -> bool;
}

impl Representation for f32 {
    const LABEL: &'static str = "f32";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn magnitude(self) -> Self {
        libm::fabsf(self)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    #[inline]
    fn is_sign_negative(&self) -> bool {
        f32::is_sign_negative(*self)
    }
}

impl Representation for f64 {
    const LABEL: &'static str = "f64";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn magnitude(self) -> Self {
        libm::fabs(self)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    #[inline]
    fn is_sign_negative(&self) -> bool {
        f64::is_sign_negative(*self)
    }
}

/// Extended precision: an unevaluated sum of two doubles.
#[cfg(feature = "extended")]
pub type Extended = twofloat::TwoFloat;

#[cfg(feature = "extended")]
impl Representation for Extended {
    const LABEL: &'static str = "extended";

    #[inline]
    fn from_f64(value: f64) -> Self {
        Extended::from(value)
    }

    #[inline]
    fn magnitude(self) -> Self {
        if self.hi().is_sign_negative() {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.hi().is_finite() && self.lo().is_finite()
    }

    // The high word carries the sign of the whole sum.
    #[inline]
    fn is_sign_negative(&self) -> bool {
        self.hi().is_sign_negative()
    }
}

/// Range class of a constant: which exponent range it needs.
pub trait RangeClass: sealed::Sealed {
    /// `true` if value, uncertainty and precision all stay finite and the
    /// value stays nonzero when rounded to single precision.
    const SINGLE_PRECISION: bool;
}

/// Constants that survive rounding to single precision.
#[derive(Debug)]
pub enum Narrow {}

/// Constants that need at least the double-precision exponent range.
#[derive(Debug)]
pub enum Wide {}

impl RangeClass for Narrow {
    const SINGLE_PRECISION: bool = true;
}

impl RangeClass for Wide {
    const SINGLE_PRECISION: bool = false;
}

/// Marks a representation as admitting constants of range class `R`.
pub trait Covers<R: RangeClass>: Representation {}

impl Covers<Narrow> for f32 {}
impl Covers<Narrow> for f64 {}
impl Covers<Wide> for f64 {}

#[cfg(feature = "extended")]
impl Covers<Narrow> for Extended {}
#[cfg(feature = "extended")]
impl Covers<Wide> for Extended {}

/// `true` if `value` can be read as `f32` without overflowing or flushing
/// to zero, and the same holds for its uncertainty ratio.
pub fn fits_single_precision(value: f64, uncertainty: f64) -> bool {
    let v = value as f32;
    let u = uncertainty as f32;
    v.is_finite() && v != 0.0 && u.is_finite() && (u / v).is_finite()
}
