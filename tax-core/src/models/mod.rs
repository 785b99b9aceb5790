mod filing_status;
mod tax_bracket;
mod tax_estimate;
mod tax_year_config;

pub use filing_status::{FilingStatus, UnknownFilingStatus};
pub use tax_bracket::TaxBracket;
pub use tax_estimate::{
    DeductionChoice, DeductionKind, EstimateInput, ItemizedDeductions, TaxEstimateResult,
};
pub use tax_year_config::{StandardDeduction, TAX_YEAR_2023, TaxYearConfig};
