use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::{FilingStatus, TaxBracket};

/// Standard deduction amount for one filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardDeduction {
    pub filing_status: FilingStatus,
    pub amount: Decimal,
}

/// Tax law constants for a single tax year.
///
/// The estimator borrows one of these rather than reading globals, so tests
/// can run against a hand-built schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub standard_deductions: &'static [StandardDeduction],
    /// Ascending, contiguous brackets starting at zero.
    pub tax_brackets: &'static [TaxBracket],
    /// Ceiling on the state and local tax component of itemized deductions.
    pub salt_deduction_cap: Decimal,
}

impl TaxYearConfig {
    /// Looks up the standard deduction for `filing_status`.
    ///
    /// A status missing from the table gets the single amount; a table
    /// without a single entry yields zero.
    pub fn standard_deduction(
        &self,
        filing_status: FilingStatus,
    ) -> Decimal {
        let find = |status: FilingStatus| {
            self.standard_deductions
                .iter()
                .find(|d| d.filing_status == status)
                .map(|d| d.amount)
        };

        find(filing_status)
            .or_else(|| find(FilingStatus::Single))
            .unwrap_or(Decimal::ZERO)
    }
}

const STANDARD_DEDUCTIONS_2023: [StandardDeduction; 4] = [
    StandardDeduction {
        filing_status: FilingStatus::Single,
        amount: dec!(13850),
    },
    StandardDeduction {
        filing_status: FilingStatus::MarriedJointly,
        amount: dec!(27700),
    },
    StandardDeduction {
        filing_status: FilingStatus::HeadOfHousehold,
        amount: dec!(20800),
    },
    StandardDeduction {
        filing_status: FilingStatus::MarriedSeparately,
        amount: dec!(13850),
    },
];

// Lower bounds after the first start one dollar above the previous ceiling.
const TAX_BRACKETS_2023: [TaxBracket; 7] = [
    TaxBracket {
        min_income: dec!(0),
        max_income: Some(dec!(11000)),
        tax_rate: dec!(0.10),
    },
    TaxBracket {
        min_income: dec!(11001),
        max_income: Some(dec!(44725)),
        tax_rate: dec!(0.12),
    },
    TaxBracket {
        min_income: dec!(44726),
        max_income: Some(dec!(95375)),
        tax_rate: dec!(0.22),
    },
    TaxBracket {
        min_income: dec!(95376),
        max_income: Some(dec!(182100)),
        tax_rate: dec!(0.24),
    },
    TaxBracket {
        min_income: dec!(182101),
        max_income: Some(dec!(231250)),
        tax_rate: dec!(0.32),
    },
    TaxBracket {
        min_income: dec!(231251),
        max_income: Some(dec!(578125)),
        tax_rate: dec!(0.35),
    },
    TaxBracket {
        min_income: dec!(578126),
        max_income: None,
        tax_rate: dec!(0.37),
    },
];

/// The 2023 schedule: standard deductions, brackets and the $10,000 SALT cap.
pub const TAX_YEAR_2023: TaxYearConfig = TaxYearConfig {
    tax_year: 2023,
    standard_deductions: &STANDARD_DEDUCTIONS_2023,
    tax_brackets: &TAX_BRACKETS_2023,
    salt_deduction_cap: dec!(10000),
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn standard_deduction_for_each_status() {
        let cases = [
            (FilingStatus::Single, dec!(13850)),
            (FilingStatus::MarriedJointly, dec!(27700)),
            (FilingStatus::HeadOfHousehold, dec!(20800)),
            (FilingStatus::MarriedSeparately, dec!(13850)),
        ];

        for (status, expected) in cases {
            assert_eq!(
                TAX_YEAR_2023.standard_deduction(status),
                expected,
                "standard deduction for {status}"
            );
        }
    }

    #[test]
    fn standard_deduction_missing_status_uses_single() {
        const PARTIAL: [StandardDeduction; 1] = [StandardDeduction {
            filing_status: FilingStatus::Single,
            amount: dec!(500),
        }];
        let config = TaxYearConfig {
            standard_deductions: &PARTIAL,
            ..TAX_YEAR_2023
        };

        assert_eq!(
            config.standard_deduction(FilingStatus::HeadOfHousehold),
            dec!(500)
        );
    }

    #[test]
    fn standard_deduction_empty_table_is_zero() {
        let config = TaxYearConfig {
            standard_deductions: &[],
            ..TAX_YEAR_2023
        };

        assert_eq!(config.standard_deduction(FilingStatus::Single), dec!(0));
    }

    #[test]
    fn brackets_are_ordered_and_open_ended() {
        let brackets = TAX_YEAR_2023.tax_brackets;

        assert_eq!(brackets[0].min_income, dec!(0));
        assert!(brackets.windows(2).all(|w| w[0].min_income < w[1].min_income));
        assert!(brackets.windows(2).all(|w| w[0].tax_rate < w[1].tax_rate));
        assert!(brackets[..brackets.len() - 1]
            .iter()
            .all(|b| b.max_income.is_some()));
        assert_eq!(brackets[brackets.len() - 1].max_income, None);
    }
}
