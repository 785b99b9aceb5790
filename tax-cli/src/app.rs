use std::io::Write;

use anyhow::Result;
use tax_core::{EstimateInput, TaxEstimator};
use tracing::{error, info};

use crate::cli::{BatchArgs, Cli, Command, EstimateArgs};
use crate::csv_loader;
use crate::render::{EstimateReport, write_reports};
use crate::validation::validate_input;

/// Dispatches the parsed command, writing estimates to `out`.
pub fn run<W: Write>(
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    match &cli.command {
        Command::Estimate(args) => run_estimate(args, out),
        Command::Batch(args) => run_batch(args, out),
    }
}

/// Validates and estimates one input.
///
/// Invalid input is logged and returned as an error without computing.
pub fn estimate_one(
    estimator: &TaxEstimator<'_>,
    input: &EstimateInput,
    breakdown: bool,
) -> Result<EstimateReport> {
    if let Err(invalid) = validate_input(input) {
        error!(field = invalid.field, value = %invalid.value, "rejected input");
        return Err(invalid.into());
    }

    let result = estimator.estimate(input);
    let breakdown = breakdown.then(|| estimator.engine().breakdown(result.taxable_income));

    Ok(EstimateReport {
        row: None,
        result,
        breakdown,
    })
}

fn run_estimate<W: Write>(
    args: &EstimateArgs,
    out: &mut W,
) -> Result<()> {
    let estimator = TaxEstimator::default();
    let report = estimate_one(&estimator, &args.to_input(), args.breakdown)?;

    info!(
        deductions_used = %report.result.deductions_used,
        refund = report.result.is_refund(),
        "estimate complete"
    );
    write_reports(out, &[report], args.format)
}

fn run_batch<W: Write>(
    args: &BatchArgs,
    out: &mut W,
) -> Result<()> {
    let inputs = csv_loader::load_from_file(&args.file)?;
    info!(rows = inputs.len(), file = %args.file.display(), "loaded batch");

    let estimator = TaxEstimator::default();
    let reports: Vec<EstimateReport> = inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| EstimateReport {
            row: Some(idx + 1),
            result: estimator.estimate(input),
            breakdown: None,
        })
        .collect();

    write_reports(out, &reports, args.format)
}
