//! Federal tax estimate from W-2 figures.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Standard deduction for the filing status |
//! | 2    | Itemized total (SALT capped, other items at face value) |
//! | 3    | Deduction used: larger of steps 1 and 2, ties go to standard |
//! | 4    | Taxable income: wages minus step 3 (not floored) |
//! | 5    | Tax liability from the bracket schedule |
//! | 6    | Refund or amount owed: federal withholding minus step 5 |
//!
//! Monetary outputs are rounded to cents. State withholding is carried on the
//! input but plays no part in the federal figures.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{DeductionKind, EstimateInput, FilingStatus};
//! use tax_core::calculations::TaxEstimator;
//!
//! let input = EstimateInput {
//!     wages: dec!(50000),
//!     federal_tax_withheld: dec!(5000),
//!     filing_status: FilingStatus::Single,
//!     ..Default::default()
//! };
//!
//! let result = TaxEstimator::default().estimate(&input);
//!
//! assert_eq!(result.taxable_income, dec!(36150.00));
//! assert_eq!(result.federal_tax_liability, dec!(4117.88));
//! assert_eq!(result.federal_refund_or_amount_owed, dec!(882.12));
//! assert_eq!(result.deductions_used, DeductionKind::Standard);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::brackets::BracketTaxEngine;
use crate::calculations::common::{cap, round_to_cents};
use crate::{
    DeductionChoice, DeductionKind, EstimateInput, FilingStatus, ItemizedDeductions,
    TAX_YEAR_2023, TaxEstimateResult, TaxYearConfig,
};

/// Computes [`TaxEstimateResult`]s against one tax year's constants.
///
/// Holds no state between calls; estimating the same input twice gives the
/// same result.
#[derive(Debug, Clone, Copy)]
pub struct TaxEstimator<'a> {
    config: &'a TaxYearConfig,
}

impl Default for TaxEstimator<'static> {
    fn default() -> Self {
        Self::new(&TAX_YEAR_2023)
    }
}

impl<'a> TaxEstimator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a TaxYearConfig {
        self.config
    }

    /// The bracket engine for this estimator's schedule.
    pub fn engine(&self) -> BracketTaxEngine<'a> {
        BracketTaxEngine::new(self.config.tax_brackets)
    }

    /// Runs the full estimate.
    ///
    /// Inputs are not validated; negative wages or withholding produce
    /// results that follow the same arithmetic.
    pub fn estimate(
        &self,
        input: &EstimateInput,
    ) -> TaxEstimateResult {
        let standard = self.standard_deduction(input.filing_status);
        let itemized = self.itemized_total(&input.deductions);
        let (total_deductions, deductions_used) = self.determine_deduction(standard, itemized);

        let taxable_income = self.taxable_income(input.wages, total_deductions);
        let federal_tax_liability = self.engine().calculate(taxable_income);
        let federal_refund_or_amount_owed =
            self.refund_or_amount_owed(input.federal_tax_withheld, federal_tax_liability);

        debug!(
            tax_year = self.config.tax_year,
            filing_status = %input.filing_status,
            %standard,
            %itemized,
            %deductions_used,
            %taxable_income,
            %federal_tax_liability,
            "estimated federal tax"
        );

        TaxEstimateResult {
            taxable_income: round_to_cents(taxable_income),
            federal_tax_liability: round_to_cents(federal_tax_liability),
            federal_tax_withheld: input.federal_tax_withheld,
            federal_refund_or_amount_owed: round_to_cents(federal_refund_or_amount_owed),
            deductions_used,
            total_deductions: round_to_cents(total_deductions),
        }
    }

    fn standard_deduction(
        &self,
        filing_status: FilingStatus,
    ) -> Decimal {
        self.config.standard_deduction(filing_status)
    }

    /// Sum of itemized deductions after the SALT cap, zero for standard.
    fn itemized_total(
        &self,
        deductions: &DeductionChoice,
    ) -> Decimal {
        match deductions {
            DeductionChoice::Standard => Decimal::ZERO,
            DeductionChoice::Itemized(items) => {
                cap(items.state_and_local_taxes, self.config.salt_deduction_cap)
                    + items.mortgage_interest
                    + items.charitable_donations
                    + items.medical_expenses
            }
        }
    }

    fn determine_deduction(
        &self,
        standard: Decimal,
        itemized: Decimal,
    ) -> (Decimal, DeductionKind) {
        if itemized > standard {
            (itemized, DeductionKind::Itemized)
        } else {
            (standard, DeductionKind::Standard)
        }
    }

    fn taxable_income(
        &self,
        wages: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        wages - total_deductions
    }

    fn refund_or_amount_owed(
        &self,
        federal_tax_withheld: Decimal,
        federal_tax_liability: Decimal,
    ) -> Decimal {
        federal_tax_withheld - federal_tax_liability
    }
}

/// Estimates with the 2023 schedule from the five W-2 inputs.
///
/// `itemized` of `None` means the standard deduction was chosen.
pub fn estimate_tax(
    wages: Decimal,
    federal_tax_withheld: Decimal,
    state_tax_withheld: Decimal,
    filing_status: FilingStatus,
    itemized: Option<ItemizedDeductions>,
) -> TaxEstimateResult {
    let input = EstimateInput {
        wages,
        federal_tax_withheld,
        state_tax_withheld,
        filing_status,
        deductions: itemized.map_or(DeductionChoice::Standard, DeductionChoice::Itemized),
    };
    TaxEstimator::default().estimate(&input)
}
