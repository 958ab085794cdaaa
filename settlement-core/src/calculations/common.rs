//! Common utility functions for settlement calculations.

use rust_decimal::Decimal;

/// Rounds a decimal amount to whole won using half-up rounding.
///
/// The calculator itself returns exact values; this is for callers that
/// display amounts as whole won.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use settlement_core::calculations::common::round_to_won;
///
/// assert_eq!(round_to_won(dec!(840000.4)), dec!(840000));
/// assert_eq!(round_to_won(dec!(840000.5)), dec!(840001));
/// ```
pub fn round_to_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use settlement_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_won tests
    // =========================================================================

    #[test]
    fn round_to_won_rounds_down_below_midpoint() {
        let result = round_to_won(dec!(599999.4));

        assert_eq!(result, dec!(599999));
    }

    #[test]
    fn round_to_won_rounds_up_at_midpoint() {
        let result = round_to_won(dec!(599999.5));

        assert_eq!(result, dec!(600000));
    }

    #[test]
    fn round_to_won_preserves_whole_amounts() {
        let result = round_to_won(dec!(3990000));

        assert_eq!(result, dec!(3990000));
    }

    #[test]
    fn round_to_won_handles_zero() {
        let result = round_to_won(dec!(0.0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100), dec!(200));

        assert_eq!(result, dec!(200));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150), dec!(150));

        assert_eq!(result, dec!(150));
    }

    #[test]
    fn max_clamps_negative_against_zero() {
        let result = max(dec!(-50), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }
}
