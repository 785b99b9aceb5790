use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Error returned by the strict [`FilingStatus::from_str`] parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filing status '{0}'")]
pub struct UnknownFilingStatus(pub String);

/// Filing status on the return. Selects the standard deduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJointly,
    HeadOfHousehold,
    MarriedSeparately,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedJointly,
        Self::HeadOfHousehold,
        Self::MarriedSeparately,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedJointly => "married_jointly",
            Self::HeadOfHousehold => "head_of_household",
            Self::MarriedSeparately => "married_separately",
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJointly => "Married Filing Jointly",
            Self::HeadOfHousehold => "Head of Household",
            Self::MarriedSeparately => "Married Filing Separately",
        }
    }

    /// Matches the snake_case code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|status| status.as_str() == code)
    }

    /// Like [`FilingStatus::parse`], but unrecognized values normalize to
    /// [`FilingStatus::Single`] instead of failing.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(input = %s, "unrecognized filing status, using single");
            Self::Single
        })
    }
}

impl FromStr for FilingStatus {
    type Err = UnknownFilingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFilingStatus(s.to_string()))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_code() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            FilingStatus::parse("  Married_Jointly "),
            Some(FilingStatus::MarriedJointly)
        );
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(FilingStatus::parse("qualifying_widow"), None);
        assert_eq!(FilingStatus::parse(""), None);
    }

    #[test]
    fn parse_or_default_falls_back_to_single() {
        assert_eq!(
            FilingStatus::parse_or_default("bogus"),
            FilingStatus::Single
        );
        assert_eq!(
            FilingStatus::parse_or_default("head_of_household"),
            FilingStatus::HeadOfHousehold
        );
    }

    #[test]
    fn from_str_reports_offending_value() {
        let err = "MFJ".parse::<FilingStatus>().unwrap_err();

        assert_eq!(err, UnknownFilingStatus("MFJ".to_string()));
        assert_eq!(err.to_string(), "unknown filing status 'MFJ'");
    }

    #[test]
    fn serde_uses_snake_case_codes() {
        let json = serde_json::to_string(&FilingStatus::MarriedSeparately).unwrap();

        assert_eq!(json, "\"married_separately\"");
    }
}
