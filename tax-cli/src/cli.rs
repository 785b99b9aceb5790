use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tax_core::{DeductionChoice, EstimateInput, FilingStatus, ItemizedDeductions};

use crate::render::OutputFormat;
use crate::utils::parse_amount;

/// Federal income tax estimator for W-2 wage earners.
///
/// Applies the 2023 standard deduction or your itemized deductions and the
/// 2023 marginal brackets, then compares the result with what was withheld.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate a single return from W-2 figures.
    Estimate(EstimateArgs),
    /// Estimate every row of a CSV file of W-2 figures.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Wages (Box 1 of W-2).
    #[arg(long, value_parser = parse_amount)]
    pub wages: Decimal,

    /// Federal tax withheld (Box 2 of W-2).
    #[arg(long, value_parser = parse_amount)]
    pub federal_withheld: Decimal,

    /// State tax withheld (Box 17 of W-2). Informational only.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub state_withheld: Decimal,

    /// single, married_jointly, head_of_household or married_separately.
    /// Anything else is treated as single.
    #[arg(long, default_value = "single")]
    pub filing_status: String,

    /// Use itemized deductions instead of the standard deduction.
    #[arg(long)]
    pub itemize: bool,

    /// State and local taxes paid (capped at 10,000).
    #[arg(long, value_parser = parse_amount, requires = "itemize")]
    pub state_local_taxes: Option<Decimal>,

    /// Mortgage interest paid.
    #[arg(long, value_parser = parse_amount, requires = "itemize")]
    pub mortgage_interest: Option<Decimal>,

    /// Charitable donations.
    #[arg(long, value_parser = parse_amount, requires = "itemize")]
    pub charitable_donations: Option<Decimal>,

    /// Medical expenses.
    #[arg(long, value_parser = parse_amount, requires = "itemize")]
    pub medical_expenses: Option<Decimal>,

    /// Show how much tax each bracket contributes.
    #[arg(long)]
    pub breakdown: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl EstimateArgs {
    pub fn to_input(&self) -> EstimateInput {
        let deductions = if self.itemize {
            DeductionChoice::Itemized(ItemizedDeductions {
                state_and_local_taxes: self.state_local_taxes.unwrap_or_default(),
                mortgage_interest: self.mortgage_interest.unwrap_or_default(),
                charitable_donations: self.charitable_donations.unwrap_or_default(),
                medical_expenses: self.medical_expenses.unwrap_or_default(),
            })
        } else {
            DeductionChoice::Standard
        };

        EstimateInput {
            wages: self.wages,
            federal_tax_withheld: self.federal_withheld,
            state_tax_withheld: self.state_withheld,
            filing_status: FilingStatus::parse_or_default(&self.filing_status),
            deductions,
        }
    }
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file with one W-2 per row.
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
