//! Shared monetary helpers for the tax calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, with midpoints rounded away from zero.
///
/// The result always carries a scale of two, so whole-dollar amounts display
/// as `13850.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(4117.884)), dec!(4117.88));
/// assert_eq!(round_to_cents(dec!(4117.885)), dec!(4117.89));
/// assert_eq!(round_to_cents(dec!(-882.125)), dec!(-882.13));
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Limits `value` to at most `ceiling`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::cap;
///
/// assert_eq!(cap(dec!(15000), dec!(10000)), dec!(10000));
/// assert_eq!(cap(dec!(4200), dec!(10000)), dec!(4200));
/// ```
pub fn cap(
    value: Decimal,
    ceiling: Decimal,
) -> Decimal {
    value.min(ceiling)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_to_cents_truncates_below_midpoint() {
        assert_eq!(round_to_cents(dec!(1160.284)), dec!(1160.28));
    }

    #[test]
    fn round_to_cents_rounds_midpoint_up() {
        // Banker's rounding would give 0.12 here.
        assert_eq!(round_to_cents(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_to_cents_rounds_negative_midpoint_away_from_zero() {
        assert_eq!(round_to_cents(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn round_to_cents_pads_whole_amounts() {
        let rounded = round_to_cents(dec!(13850));

        assert_eq!(rounded, dec!(13850));
        assert_eq!(rounded.to_string(), "13850.00");
    }

    #[test]
    fn cap_keeps_values_at_the_ceiling() {
        assert_eq!(cap(dec!(10000), dec!(10000)), dec!(10000));
    }

    #[test]
    fn cap_passes_small_values_through() {
        assert_eq!(cap(dec!(0), dec!(10000)), dec!(0));
    }
}
