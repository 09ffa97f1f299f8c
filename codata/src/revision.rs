//! Runtime access to a revision's catalog.
//!
//! The typed constants in [`codata_2006`](crate::codata_2006) and
//! [`codata_2002`](crate::codata_2002) are the primary API. [`Revision`]
//! covers the cases where the constant is only known at runtime, such as a
//! command-line argument or a configuration value: it resolves a revision from
//! a string and looks records up by CODATA name or identifier.
//!
//! There is deliberately no "latest" revision. Callers name the one they pin.
//!
//! ```
//! use codata::Revision;
//!
//! let rev: Revision = "2006".parse().unwrap();
//! let me = rev.find("electron mass").unwrap();
//! assert_eq!(me.value, 9.10938215e-31);
//! assert_eq!(rev.find("electron_mass").unwrap(), me);
//! ```

use std::fmt;
use std::str::FromStr;

use codata_core::validate::validate_catalog;
use codata_core::{CodataError, CodataResult, ConstantRecord};

use crate::{codata_2002, codata_2006};

/// A published CODATA adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Revision {
    Codata2002,
    Codata2006,
}

impl Revision {
    /// Every revision shipped, oldest first.
    pub const ALL: [Revision; 2] = [Revision::Codata2002, Revision::Codata2006];

    pub fn year(self) -> u16 {
        match self {
            Self::Codata2002 => codata_2002::REVISION,
            Self::Codata2006 => codata_2006::REVISION,
        }
    }

    pub fn from_year(year: u16) -> CodataResult<Self> {
        Self::ALL
            .into_iter()
            .find(|rev| rev.year() == year)
            .ok_or_else(|| CodataError::unknown_revision(&year.to_string()))
    }

    /// All records of this revision in table order.
    pub fn catalog(self) -> &'static [ConstantRecord] {
        match self {
            Self::Codata2002 => codata_2002::CATALOG,
            Self::Codata2006 => codata_2006::CATALOG,
        }
    }

    /// Looks a record up by its exact CODATA name or its identifier.
    pub fn find(self, name: &str) -> CodataResult<&'static ConstantRecord> {
        let found = self
            .catalog()
            .iter()
            .find(|rec| rec.name == name || rec.ident == name);

        match found {
            Some(rec) => {
                tracing::debug!(revision = self.year(), name, ident = rec.ident, "constant found");
                Ok(rec)
            }
            None => {
                tracing::debug!(revision = self.year(), name, "constant not found");
                Err(CodataError::unknown_constant(&self.to_string(), name))
            }
        }
    }

    /// Records whose CODATA name contains `fragment`, ignoring ASCII case.
    pub fn search(self, fragment: &str) -> Vec<&'static ConstantRecord> {
        let needle = fragment.to_ascii_lowercase();
        let hits: Vec<_> = self
            .catalog()
            .iter()
            .filter(|rec| rec.name.to_ascii_lowercase().contains(&needle))
            .collect();
        tracing::debug!(revision = self.year(), fragment, hits = hits.len(), "catalog search");
        hits
    }

    /// Runs [`validate_catalog`] over this revision's table.
    pub fn validate(self) -> CodataResult<()> {
        validate_catalog(self.catalog())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CODATA {}", self.year())
    }
}

/// Accepts `"2006"`, `"codata_2006"`, `"codata-2006"` and `"CODATA 2006"`,
/// ignoring case and surrounding whitespace.
impl FromStr for Revision {
    type Err = CodataError;

    fn from_str(s: &str) -> CodataResult<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("codata")
            .map(|rest| rest.trim_start_matches(['_', '-', ' ']))
            .unwrap_or(&lowered);

        digits
            .parse::<u16>()
            .ok()
            .and_then(|year| Self::from_year(year).ok())
            .ok_or_else(|| CodataError::unknown_revision(s))
    }
}
