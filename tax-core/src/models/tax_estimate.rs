use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Itemized deduction amounts as entered, before any cap is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemizedDeductions {
    pub state_and_local_taxes: Decimal,
    pub mortgage_interest: Decimal,
    pub charitable_donations: Decimal,
    pub medical_expenses: Decimal,
}

/// Which deduction the taxpayer asked for.
///
/// Choosing [`DeductionChoice::Itemized`] does not force itemizing: the
/// standard deduction still wins when it is at least as large.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeductionChoice {
    #[default]
    Standard,
    Itemized(ItemizedDeductions),
}

impl DeductionChoice {
    pub fn itemized(&self) -> Option<&ItemizedDeductions> {
        match self {
            Self::Standard => None,
            Self::Itemized(deductions) => Some(deductions),
        }
    }
}

/// The deduction actually applied to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionKind {
    Standard,
    Itemized,
}

impl DeductionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Itemized => "Itemized",
        }
    }
}

impl fmt::Display for DeductionKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// W-2 figures and deduction choice for one estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Box 1 wages.
    pub wages: Decimal,
    /// Box 2 federal income tax withheld.
    pub federal_tax_withheld: Decimal,
    /// Box 17 state income tax withheld. Informational only.
    pub state_tax_withheld: Decimal,
    pub filing_status: FilingStatus,
    pub deductions: DeductionChoice,
}

/// Outcome of a federal tax estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimateResult {
    /// Wages minus deductions. Negative when deductions exceed wages.
    pub taxable_income: Decimal,
    pub federal_tax_liability: Decimal,
    /// Passed through from the input unchanged.
    pub federal_tax_withheld: Decimal,
    /// Positive for a refund, negative for an amount owed.
    pub federal_refund_or_amount_owed: Decimal,
    pub deductions_used: DeductionKind,
    pub total_deductions: Decimal,
}

impl TaxEstimateResult {
    pub fn is_refund(&self) -> bool {
        self.federal_refund_or_amount_owed > Decimal::ZERO
    }

    /// Labeled result lines in display order.
    pub fn lines(&self) -> [(&'static str, String); 6] {
        [
            ("Taxable Income", self.taxable_income.to_string()),
            (
                "Federal Tax Liability",
                self.federal_tax_liability.to_string(),
            ),
            ("Federal Tax Withheld", self.federal_tax_withheld.to_string()),
            (
                "Federal Refund or Amount Owed",
                self.federal_refund_or_amount_owed.to_string(),
            ),
            ("Deductions Used", self.deductions_used.to_string()),
            ("Total Deductions", self.total_deductions.to_string()),
        ]
    }
}

impl fmt::Display for TaxEstimateResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_result() -> TaxEstimateResult {
        TaxEstimateResult {
            taxable_income: dec!(36150.00),
            federal_tax_liability: dec!(4117.88),
            federal_tax_withheld: dec!(5000),
            federal_refund_or_amount_owed: dec!(882.12),
            deductions_used: DeductionKind::Standard,
            total_deductions: dec!(13850.00),
        }
    }

    #[test]
    fn display_renders_labeled_lines_in_order() {
        let expected = "\
Taxable Income: 36150.00
Federal Tax Liability: 4117.88
Federal Tax Withheld: 5000
Federal Refund or Amount Owed: 882.12
Deductions Used: Standard
Total Deductions: 13850.00
";

        assert_eq!(sample_result().to_string(), expected);
    }

    #[test]
    fn is_refund_depends_on_sign() {
        let mut result = sample_result();
        assert!(result.is_refund());

        result.federal_refund_or_amount_owed = dec!(-12.50);
        assert!(!result.is_refund());

        result.federal_refund_or_amount_owed = dec!(0);
        assert!(!result.is_refund());
    }

    #[test]
    fn deduction_choice_exposes_itemized_amounts() {
        let itemized = ItemizedDeductions {
            mortgage_interest: dec!(9000),
            ..Default::default()
        };

        assert_eq!(DeductionChoice::Standard.itemized(), None);
        assert_eq!(
            DeductionChoice::Itemized(itemized).itemized(),
            Some(&itemized)
        );
    }

    #[test]
    fn deduction_choice_serializes_with_type_tag() {
        let json = serde_json::to_value(DeductionChoice::Standard).unwrap();

        assert_eq!(json, serde_json::json!({ "type": "standard" }));
    }
}
