//! Input checks performed before an estimate is computed.
//!
//! The estimator accepts any numbers; rejecting nonsense such as zero wages
//! is the front end's job.

use rust_decimal::Decimal;
use tax_core::{EstimateInput, ItemizedDeductions};
use thiserror::Error;

/// An input failed validation. The message is deliberately generic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Please enter valid values for wages and tax withheld.")]
pub struct InvalidInput {
    /// Name of the first offending field.
    pub field: &'static str,
    pub value: Decimal,
}

/// Wages must be positive; every other amount must be non-negative.
pub fn validate_input(input: &EstimateInput) -> Result<(), InvalidInput> {
    if input.wages <= Decimal::ZERO {
        return Err(InvalidInput {
            field: "wages",
            value: input.wages,
        });
    }

    non_negative("federal_tax_withheld", input.federal_tax_withheld)?;
    non_negative("state_tax_withheld", input.state_tax_withheld)?;

    if let Some(items) = input.deductions.itemized() {
        validate_itemized(items)?;
    }

    Ok(())
}

fn validate_itemized(items: &ItemizedDeductions) -> Result<(), InvalidInput> {
    non_negative("state_and_local_taxes", items.state_and_local_taxes)?;
    non_negative("mortgage_interest", items.mortgage_interest)?;
    non_negative("charitable_donations", items.charitable_donations)?;
    non_negative("medical_expenses", items.medical_expenses)
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), InvalidInput> {
    if value < Decimal::ZERO {
        Err(InvalidInput { field, value })
    } else {
        Ok(())
    }
}
