//! Drill hole records.
//!
//! Holes come from drill tool tables rather than symbol descriptors, so they
//! are not part of the symbol grammar table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SymbolError;

/// Plating state of a drilled hole wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HolePlating {
    /// Plated through hole.
    Plated,
    /// Non-plated (mechanical) hole.
    NonPlated,
    /// Plated via.
    Via,
}

impl HolePlating {
    /// Token used for this plating in drill tool tables.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plated => "PLATED",
            Self::NonPlated => "NON_PLATED",
            Self::Via => "VIA",
        }
    }
}

impl FromStr for HolePlating {
    type Err = SymbolError;

    /// Parse a drill tool `TYPE` token, ignoring ASCII case.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        [Self::Plated, Self::NonPlated, Self::Via]
            .into_iter()
            .find(|plating| plating.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| SymbolError::UnknownPlating(token.to_string()))
    }
}

impl fmt::Display for HolePlating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A drilled hole with its plating and manufacturing tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hole {
    /// Finished hole diameter.
    pub diameter: f64,
    /// Wall plating.
    pub plating: HolePlating,
    /// Allowed oversize.
    pub tolerance_plus: f64,
    /// Allowed undersize.
    pub tolerance_minus: f64,
}

impl Hole {
    /// Creates a hole record. Values are stored as given.
    pub const fn new(
        diameter: f64,
        plating: HolePlating,
        tolerance_plus: f64,
        tolerance_minus: f64,
    ) -> Self {
        Self {
            diameter,
            plating,
            tolerance_plus,
            tolerance_minus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_hol_001_plating_tokens_parse() {
        assert_eq!("PLATED".parse::<HolePlating>(), Ok(HolePlating::Plated));
        assert_eq!("non_plated".parse::<HolePlating>(), Ok(HolePlating::NonPlated));
        assert_eq!("Via".parse::<HolePlating>(), Ok(HolePlating::Via));
    }

    #[test]
    fn ut_hol_002_plating_display_matches_token() {
        assert_eq!(HolePlating::NonPlated.to_string(), "NON_PLATED");
    }

    #[test]
    fn ut_hol_003_hole_keeps_fields() {
        let hole = Hole::new(0.8, HolePlating::Via, 0.05, 0.02);
        assert!((hole.diameter - 0.8).abs() < f64::EPSILON);
        assert_eq!(hole.plating, HolePlating::Via);
        assert!((hole.tolerance_plus - 0.05).abs() < f64::EPSILON);
        assert!((hole.tolerance_minus - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn bc_hol_001_unknown_plating_is_rejected() {
        assert_eq!(
            "GOLD".parse::<HolePlating>(),
            Err(SymbolError::UnknownPlating("GOLD".to_string()))
        );
        assert!("".parse::<HolePlating>().is_err());
    }
}
