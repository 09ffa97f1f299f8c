#![allow(dead_code)]

use codata::{PhysicalConstant, Representation, Revision};
use codata_core::test_helpers::assert_ulp_le_f32;
use codata_core::validate::validate_record;

/// Properties every accessor triple must satisfy in representation `T`.
#[track_caller]
pub fn check<T: Representation>(
    ident: &str,
    value: T,
    uncertainty: T,
    precision: T,
    expected_value: T,
    expected_uncertainty: T,
) {
    let repr = T::LABEL;
    assert!(value.is_finite(), "{ident}<{repr}>: value not finite");
    assert_eq!(value, expected_value, "{ident}<{repr}>: value");
    assert!(
        uncertainty.is_finite(),
        "{ident}<{repr}>: uncertainty not finite"
    );
    assert_eq!(
        uncertainty, expected_uncertainty,
        "{ident}<{repr}>: uncertainty"
    );
    assert!(precision.is_finite(), "{ident}<{repr}>: precision not finite");
    assert!(
        !precision.is_sign_negative(),
        "{ident}<{repr}>: precision is negative"
    );
    assert_eq!(
        precision,
        (expected_uncertainty / expected_value).magnitude(),
        "{ident}<{repr}>: precision"
    );
}

/// The typed constant and its catalog record describe the same entry.
#[track_caller]
pub fn check_record<C: PhysicalConstant>() {
    let revision = Revision::from_year(C::REVISION).unwrap();
    let by_name = revision.find(C::NAME).unwrap();
    assert_eq!(*by_name, C::RECORD, "{}: catalog record", C::IDENT);
    assert_eq!(revision.find(C::IDENT).unwrap(), by_name);
    validate_record(by_name).unwrap();
}

/// Single-precision precision stays within a few ULP of the double one when
/// both operands are normal in single precision.
#[track_caller]
pub fn check_single_against_double(ident: &str, p32: f32, p64: f64, value: f64, uncertainty: f64) {
    let normal = |x: f64| x == 0.0 || (x.abs() as f32) >= f32::MIN_POSITIVE;
    if normal(value) && normal(uncertainty) {
        assert_ulp_le_f32(p32, p64 as f32, 4, ident);
    }
}

#[cfg(feature = "extended")]
#[track_caller]
pub fn check_extended_against_double(ident: &str, pext: codata::Extended, p64: f64) {
    codata_core::test_helpers::assert_ulp_le(pext.hi(), p64, 2, ident);
}

#[cfg(feature = "extended")]
macro_rules! extended_checks {
    ($module:ident, $ident:ident, $value:expr, $uncertainty:expr) => {
        crate::common::check::<codata::Extended>(
            stringify!($ident),
            $module::$ident::value::<codata::Extended>(),
            $module::$ident::uncertainty::<codata::Extended>(),
            $module::$ident::precision::<codata::Extended>(),
            codata::Extended::from($value),
            codata::Extended::from($uncertainty),
        );
        crate::common::check_extended_against_double(
            stringify!($ident),
            $module::$ident::precision::<codata::Extended>(),
            $module::$ident::precision::<f64>(),
        );
    };
}

#[cfg(not(feature = "extended"))]
macro_rules! extended_checks {
    ($($tt:tt)*) => {};
}

/// One `#[test]` per table entry. `Narrow` entries are checked in every
/// representation, `Wide` entries in `f64` and `Extended` only.
macro_rules! table_tests {
    (@range Narrow, $module:ident, $ident:ident, $value:expr, $uncertainty:expr) => {
        crate::common::check::<f32>(
            stringify!($ident),
            $module::$ident::value::<f32>(),
            $module::$ident::uncertainty::<f32>(),
            $module::$ident::precision::<f32>(),
            ($value) as f32,
            ($uncertainty) as f32,
        );
        crate::common::check_single_against_double(
            stringify!($ident),
            $module::$ident::precision::<f32>(),
            $module::$ident::precision::<f64>(),
            $value,
            $uncertainty,
        );
        table_tests!(@range Wide, $module, $ident, $value, $uncertainty);
    };
    (@range Wide, $module:ident, $ident:ident, $value:expr, $uncertainty:expr) => {
        crate::common::check::<f64>(
            stringify!($ident),
            $module::$ident::value::<f64>(),
            $module::$ident::uncertainty::<f64>(),
            $module::$ident::precision::<f64>(),
            $value,
            $uncertainty,
        );
        extended_checks!($module, $ident, $value, $uncertainty);
        crate::common::check_record::<$module::$ident>();
    };
    ($module:ident; $( $ident:ident: $range:ident($value:expr, $uncertainty:expr), )*) => {
        $(
            #[test]
            fn $ident() {
                table_tests!(@range $range, $module, $ident, $value, $uncertainty);
            }
        )*
    };
}
