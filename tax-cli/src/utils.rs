use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a dollar amount cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a dollar amount such as `"60,000.00"` or `"$1,250"`.
///
/// Thousands separators and a leading `$` are ignored. Empty input is zero.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    let normalized = normalized.strip_prefix('$').unwrap_or(&normalized);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|source| ParseAmountError {
        input: s.to_string(),
        source,
    })
}
