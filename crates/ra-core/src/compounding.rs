//! Compounding frequencies and the fixed frequency → period-length table.

use crate::errors::{Error, Result};
use crate::Real;

/// How often a rate compounds.
///
/// Each frequency maps to a fixed compounding-period length in years;
/// `Continuous` maps to zero, which the rate conversions treat as the
/// `exp`/`ln` limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundingFrequency {
    /// Continuous compounding (period length 0).
    Continuous,
    /// Daily compounding (1/365).
    Daily,
    /// Weekly compounding (1/52).
    Weekly,
    /// Monthly compounding (1/12).
    Monthly,
    /// Quarterly compounding (1/4).
    Quarterly,
    /// Semi-annual compounding (1/2).
    SemiAnnual,
    /// Annual compounding (1).
    Annual,
}

impl CompoundingFrequency {
    /// The compounding-period length in years.
    pub fn period_fraction(self) -> Real {
        match self {
            CompoundingFrequency::Continuous => 0.0,
            CompoundingFrequency::Daily => 1.0 / 365.0,
            CompoundingFrequency::Weekly => 1.0 / 52.0,
            CompoundingFrequency::Monthly => 1.0 / 12.0,
            CompoundingFrequency::Quarterly => 0.25,
            CompoundingFrequency::SemiAnnual => 0.5,
            CompoundingFrequency::Annual => 1.0,
        }
    }
}

impl std::str::FromStr for CompoundingFrequency {
    type Err = Error;

    /// Parse a frequency token.
    ///
    /// Accepts the token variants found in quote feeds: `"Semi-Annual"`,
    /// `"SemiAnnual"`, and `"Semi"` all mean semi-annual.  Matching is
    /// case-insensitive.  Unrecognised tokens fail with
    /// [`Error::UnsupportedFrequency`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(CompoundingFrequency::Continuous),
            "daily" => Ok(CompoundingFrequency::Daily),
            "weekly" => Ok(CompoundingFrequency::Weekly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "semiannual" | "semi-annual" | "semi" => Ok(CompoundingFrequency::SemiAnnual),
            "annual" => Ok(CompoundingFrequency::Annual),
            _ => Err(Error::UnsupportedFrequency(s.to_string())),
        }
    }
}

impl std::fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompoundingFrequency::Continuous => "Continuous",
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::SemiAnnual => "SemiAnnual",
            CompoundingFrequency::Annual => "Annual",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_table() {
        assert_eq!(CompoundingFrequency::Continuous.period_fraction(), 0.0);
        assert_eq!(CompoundingFrequency::Quarterly.period_fraction(), 0.25);
        assert_eq!(CompoundingFrequency::SemiAnnual.period_fraction(), 0.5);
        assert_eq!(CompoundingFrequency::Annual.period_fraction(), 1.0);
        assert!((CompoundingFrequency::Daily.period_fraction() - 1.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(
            "SemiAnnual".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::SemiAnnual
        );
        assert_eq!(
            "Semi-Annual".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::SemiAnnual
        );
        assert_eq!(
            "semi".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::SemiAnnual
        );
        assert_eq!(
            "Continuous".parse::<CompoundingFrequency>().unwrap(),
            CompoundingFrequency::Continuous
        );
    }

    #[test]
    fn parse_unknown_token_fails() {
        let err = "Fortnightly".parse::<CompoundingFrequency>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFrequency(_)));
    }
}
