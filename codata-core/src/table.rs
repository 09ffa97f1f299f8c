//! The [`codata_table!`](crate::codata_table) macro.
//!
//! A revision module is one invocation of the macro. Each entry becomes a
//! unit struct with `value`, `uncertainty` and `precision` accessors plus a
//! [`PhysicalConstant`](crate::PhysicalConstant) impl, and the module gets a
//! `CATALOG` slice holding the same entries in table order.
//!
//! ```
//! mod codata_2006 {
//!     codata_core::codata_table! {
//!         revision: 2006;
//!
//!         speed_of_light_in_vacuum: Narrow {
//!             name: "speed of light in vacuum",
//!             value: 299792458.0,
//!             uncertainty: 0.0,
//!             unit: "m s^-1",
//!         }
//!
//!         kilogram_hertz_relationship: Wide {
//!             name: "kilogram-hertz relationship",
//!             value: 1.356392733e+50,
//!             uncertainty: 6.8e+42,
//!             unit: "Hz",
//!         }
//!     }
//! }
//!
//! use codata_2006::*;
//!
//! assert_eq!(speed_of_light_in_vacuum::value::<f32>(), 299792458.0_f64 as f32);
//! assert_eq!(kilogram_hertz_relationship::value::<f64>(), 1.356392733e+50);
//! assert_eq!(CATALOG.len(), 2);
//! assert_eq!(REVISION, 2006);
//! ```
//!
//! A `Wide` constant has no `f32` accessor:
//!
//! ```compile_fail
//! mod codata_2006 {
//!     codata_core::codata_table! {
//!         revision: 2006;
//!
//!         kilogram_hertz_relationship: Wide {
//!             name: "kilogram-hertz relationship",
//!             value: 1.356392733e+50,
//!             uncertainty: 6.8e+42,
//!             unit: "Hz",
//!         }
//!     }
//! }
//!
//! let _ = codata_2006::kilogram_hertz_relationship::value::<f32>();
//! ```

#[macro_export]
macro_rules! codata_table {
    (
        revision: $year:literal;
        $(
            $(#[$meta:meta])*
            $ident:ident: $range:ident {
                name: $name:literal,
                value: $value:expr,
                uncertainty: $uncertainty:expr,
                unit: $unit:literal $(,)?
            }
        )*
    ) => {
        /// CODATA revision year of this table.
        pub const REVISION: u16 = $year;

        $(
            $(#[$meta])*
            #[doc = concat!("CODATA ", stringify!($year), " recommended value for the ", $name, ".")]
            #[doc = ""]
            #[doc = concat!(
                "`", $name, " = (", stringify!($value), " ± ", stringify!($uncertainty), ") ", $unit, "`"
            )]
            #[allow(non_camel_case_types)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $ident;

            impl $ident {
                /// Recommended value rounded to `T`.
                #[inline]
                pub fn value<T>() -> T
                where
                    T: $crate::repr::Covers<$crate::repr::$range>,
                {
                    <Self as $crate::PhysicalConstant>::value::<T>()
                }

                /// Standard uncertainty rounded to `T`.
                #[inline]
                pub fn uncertainty<T>() -> T
                where
                    T: $crate::repr::Covers<$crate::repr::$range>,
                {
                    <Self as $crate::PhysicalConstant>::uncertainty::<T>()
                }

                /// `|uncertainty / value|` evaluated in `T`.
                #[inline]
                pub fn precision<T>() -> T
                where
                    T: $crate::repr::Covers<$crate::repr::$range>,
                {
                    <Self as $crate::PhysicalConstant>::precision::<T>()
                }
            }

            impl $crate::PhysicalConstant for $ident {
                const NAME: &'static str = $name;
                const IDENT: &'static str = stringify!($ident);
                const UNIT: &'static str = $unit;
                const VALUE: f64 = $value;
                const UNCERTAINTY: f64 = $uncertainty;
                const REVISION: u16 = $year;
                type Range = $crate::repr::$range;
            }
        )*

        /// Every constant of this revision, in table order.
        pub static CATALOG: &[$crate::ConstantRecord] = &[
            $( <$ident as $crate::PhysicalConstant>::RECORD, )*
        ];
    };
}
