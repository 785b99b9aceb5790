//! Progressive marginal-rate tax over a bracket schedule.
//!
//! Each bracket taxes only the slice of income that falls inside its own
//! bounds. For a schedule of `(min_income, max_income, rate)` triples the
//! engine walks the brackets in ascending order, adding
//! `(min(income, max_income) - min_income) * rate` for every bracket whose
//! lower bound the income exceeds, and stops at the first bracket that
//! contains the top of the income.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TAX_YEAR_2023;
//! use tax_core::calculations::BracketTaxEngine;
//!
//! let engine = BracketTaxEngine::new(TAX_YEAR_2023.tax_brackets);
//!
//! assert_eq!(engine.calculate(dec!(36150)), dec!(4117.88));
//! assert_eq!(engine.calculate(dec!(-2500)), dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxBracket;

/// Tax contributed by a single bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub bracket: TaxBracket,
    /// Portion of the taxable income that falls inside the bracket.
    pub taxed_income: Decimal,
    /// `taxed_income * bracket.tax_rate`, unrounded.
    pub tax: Decimal,
}

/// Applies a bracket schedule to taxable income.
///
/// Brackets must be sorted by `min_income` ascending with the first bracket
/// starting at zero.
#[derive(Debug, Clone, Copy)]
pub struct BracketTaxEngine<'a> {
    tax_brackets: &'a [TaxBracket],
}

impl<'a> BracketTaxEngine<'a> {
    pub fn new(tax_brackets: &'a [TaxBracket]) -> Self {
        Self { tax_brackets }
    }

    /// Total tax owed on `taxable_income`, unrounded.
    ///
    /// Zero or negative income always yields zero tax.
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.breakdown(taxable_income)
            .iter()
            .map(|contribution| contribution.tax)
            .sum()
    }

    /// Per-bracket contributions, lowest bracket first.
    ///
    /// Only brackets the income actually reaches are listed, so the result is
    /// empty for zero or negative income.
    pub fn breakdown(
        &self,
        taxable_income: Decimal,
    ) -> Vec<BracketContribution> {
        let mut contributions = Vec::new();
        if taxable_income <= Decimal::ZERO {
            return contributions;
        }

        for bracket in self.tax_brackets {
            if taxable_income > bracket.min_income {
                let top = bracket
                    .max_income
                    .map_or(taxable_income, |max| taxable_income.min(max));
                let taxed_income = top - bracket.min_income;
                contributions.push(BracketContribution {
                    bracket: *bracket,
                    taxed_income,
                    tax: taxed_income * bracket.tax_rate,
                });
            }
            if bracket.contains_top_of(taxable_income) {
                break;
            }
        }

        contributions
    }
}
