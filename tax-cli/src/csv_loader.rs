//! CSV loader for batches of W-2 inputs.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column                  | Required | Type    | Notes                                   |
//! |-------------------------|----------|---------|-----------------------------------------|
//! | `wages`                 | yes      | decimal | Box 1, must be positive                 |
//! | `federal_tax_withheld`  | yes      | decimal | Box 2                                   |
//! | `state_tax_withheld`    | no       | decimal | Box 17, informational                   |
//! | `filing_status`         | no       | string  | Unknown or empty values mean `single`   |
//! | `state_and_local_taxes` | no       | decimal | Itemized; capped at 10,000              |
//! | `mortgage_interest`     | no       | decimal | Itemized                                |
//! | `charitable_donations`  | no       | decimal | Itemized                                |
//! | `medical_expenses`      | no       | decimal | Itemized                                |
//!
//! A row itemizes when any of the last four cells is filled in; blank
//! itemized cells in such a row count as zero. Amounts may use `,` as a
//! thousands separator (quote the cell).
//!
//! ### Example
//!
//! ```csv
//! wages,federal_tax_withheld,state_tax_withheld,filing_status,state_and_local_taxes,mortgage_interest,charitable_donations,medical_expenses
//! 50000.00,5000.00,0,single,,,,
//! 120000.00,18000.00,6500.00,married_jointly,15000.00,14000.00,2500.00,
//! ```

use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tax_core::{DeductionChoice, EstimateInput, FilingStatus, ItemizedDeductions};
use tracing::debug;

use crate::utils::parse_amount;
use crate::validation::{InvalidInput, validate_input};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(deserialize_with = "deserialize_amount")]
    wages: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    federal_tax_withheld: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    state_tax_withheld: Option<Decimal>,
    #[serde(default)]
    filing_status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    state_and_local_taxes: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    mortgage_interest: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    charitable_donations: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    medical_expenses: Option<Decimal>,
}

// Amounts go through `parse_amount` as text so "1,250.00" is accepted and the
// written scale is kept.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_amount(&s).map_err(serde::de::Error::custom)
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_amount(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl CsvRow {
    fn deductions(&self) -> DeductionChoice {
        let cells = [
            self.state_and_local_taxes,
            self.mortgage_interest,
            self.charitable_donations,
            self.medical_expenses,
        ];
        if cells.iter().all(Option::is_none) {
            return DeductionChoice::Standard;
        }

        DeductionChoice::Itemized(ItemizedDeductions {
            state_and_local_taxes: self.state_and_local_taxes.unwrap_or_default(),
            mortgage_interest: self.mortgage_interest.unwrap_or_default(),
            charitable_donations: self.charitable_donations.unwrap_or_default(),
            medical_expenses: self.medical_expenses.unwrap_or_default(),
        })
    }
}

/// Errors that can occur while loading W-2 rows.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure, a missing required column, or a non-numeric amount.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but failed input validation. `row` is 1-based.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InvalidInput,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<EstimateInput, CsvLoadError> {
    let filing_status = match row.filing_status.as_deref() {
        Some(code) => FilingStatus::parse_or_default(code),
        None => FilingStatus::default(),
    };

    let input = EstimateInput {
        wages: row.wages,
        federal_tax_withheld: row.federal_tax_withheld,
        state_tax_withheld: row.state_tax_withheld.unwrap_or_default(),
        filing_status,
        deductions: row.deductions(),
    };

    validate_input(&input).map_err(|source| CsvLoadError::InvalidRow {
        row: row_number,
        source,
    })?;

    Ok(input)
}

/// Parses CSV text into validated inputs, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is malformed or a required cell
///   cannot be deserialized.
/// * [`CsvLoadError::InvalidRow`] for the first row that fails validation.
pub fn load_from_str(input: &str) -> Result<Vec<EstimateInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let inputs = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = inputs.len(), "loaded W-2 rows");
    Ok(inputs)
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> anyhow::Result<Vec<EstimateInput>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let inputs = load_from_str(&contents)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok(inputs)
}
