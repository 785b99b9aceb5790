//! Text and JSON rendering of estimate results.

use std::io::Write;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::TaxEstimateResult;
use tax_core::calculations::BracketContribution;
use tax_core::calculations::common::round_to_cents;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Label: value` lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One estimate ready for output.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// 1-based CSV row, absent for single estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub result: TaxEstimateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<BracketContribution>>,
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

fn write_breakdown<W: Write>(
    out: &mut W,
    breakdown: &[BracketContribution],
) -> anyhow::Result<()> {
    writeln!(out, "Bracket Breakdown:")?;
    for contribution in breakdown {
        let bracket = &contribution.bracket;
        let range = match bracket.max_income {
            Some(max) => format!("{} to {}", bracket.min_income, max),
            None => format!("{} and up", bracket.min_income),
        };
        writeln!(
            out,
            "  {}% on {} ({}): {}",
            percent(bracket.tax_rate),
            round_to_cents(contribution.taxed_income),
            range,
            round_to_cents(contribution.tax),
        )?;
    }
    Ok(())
}

/// Writes the result lines, then the breakdown when present.
pub fn write_text<W: Write>(
    out: &mut W,
    report: &EstimateReport,
) -> anyhow::Result<()> {
    if let Some(row) = report.row {
        writeln!(out, "Row {row}")?;
    }
    write!(out, "{}", report.result)?;
    if let Some(breakdown) = &report.breakdown {
        write_breakdown(out, breakdown)?;
    }
    Ok(())
}

/// Writes reports in `format`. Text reports are separated by blank lines;
/// JSON is a single object for one report and an array otherwise.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[EstimateReport],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (idx, report) in reports.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                write_text(out, report)?;
            }
        }
        OutputFormat::Json => {
            match reports {
                [single] if single.row.is_none() => serde_json::to_writer_pretty(&mut *out, single)?,
                _ => serde_json::to_writer_pretty(&mut *out, reports)?,
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
