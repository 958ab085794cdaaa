//! Progressive bracket schedule and tax lookup.
//!
//! A [`BracketSchedule`] is an ordered, validated sequence of
//! [`TaxBracket`]s. Each bracket carries the exact cumulative tax owed on
//! all lower tiers (`base_tax`), so the marginal computation for an income
//! touches a single bracket and the schedule is continuous at every
//! boundary by construction.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use settlement_core::BracketSchedule;
//!
//! let schedule = BracketSchedule::simplified();
//!
//! // Exactly at a boundary the income is taxed entirely in the lower tier.
//! assert_eq!(schedule.tax_for(dec!(14000000)), dec!(840000));
//! // 840,000 + (35,000,000 - 14,000,000) * 0.15
//! assert_eq!(schedule.tax_for(dec!(35000000)), dec!(3990000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors raised when a bracket sequence violates the schedule invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no brackets at all.
    #[error("schedule has no brackets")]
    Empty,

    /// A bracket other than the last one has no upper bound.
    #[error("bracket {0} has no upper bound but is not the last bracket")]
    UnboundedNotLast(usize),

    /// The last bracket has an upper bound, leaving high incomes uncovered.
    #[error("last bracket must be open-ended")]
    MissingOpenTier,

    /// An upper bound is not strictly greater than the previous one.
    #[error("bracket {0}: upper bound does not increase")]
    BoundsNotIncreasing(usize),

    /// A rate is zero or negative.
    #[error("bracket {0}: rate must be positive")]
    NonPositiveRate(usize),

    /// A rate is not strictly greater than the previous one.
    #[error("bracket {0}: rate does not increase")]
    RatesNotIncreasing(usize),

    /// A base tax does not equal the cumulative tax at the bracket's
    /// lower bound.
    #[error("bracket {index}: base tax {actual} does not equal cumulative tax {expected}")]
    BaseTaxMismatch {
        index: usize,
        expected: Decimal,
        actual: Decimal,
    },
}

/// An immutable, validated progressive bracket schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Builds a schedule from brackets ordered lowest tier first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the brackets violate any invariant:
    /// the sequence must be non-empty, exactly the last bracket open-ended,
    /// upper bounds strictly increasing, rates positive and strictly
    /// increasing, and each `base_tax` equal to the exact cumulative tax at
    /// the bracket's lower bound (zero for the first bracket).
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        Self::validate(&brackets)?;
        Ok(Self { brackets })
    }

    /// The fixed four-tier simplified schedule used by the estimator.
    ///
    /// The base taxes 840,000 / 6,240,000 / 15,360,000 are the exact
    /// cumulative amounts at 14,000,000 / 50,000,000 / 88,000,000 won and
    /// are carried as constants, never re-derived.
    pub fn simplified() -> Self {
        let brackets = vec![
            TaxBracket {
                upper_bound: Some(dec!(14000000)),
                rate: dec!(0.06),
                base_tax: Decimal::ZERO,
            },
            TaxBracket {
                upper_bound: Some(dec!(50000000)),
                rate: dec!(0.15),
                base_tax: dec!(840000),
            },
            TaxBracket {
                upper_bound: Some(dec!(88000000)),
                rate: dec!(0.24),
                base_tax: dec!(6240000),
            },
            TaxBracket {
                upper_bound: None,
                rate: dec!(0.35),
                base_tax: dec!(15360000),
            },
        ];

        Self::new(brackets).expect("built-in schedule satisfies the bracket invariants")
    }

    /// The brackets, lowest tier first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Tax owed on `taxable_income` under this schedule.
    ///
    /// An income exactly at an upper bound is taxed entirely in that
    /// bracket; incomes of zero or below owe nothing. Total over all
    /// inputs and never panics on a validated schedule.
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut lower = Decimal::ZERO;
        for bracket in &self.brackets {
            if let Some(bound) = bracket.upper_bound {
                if taxable_income > bound {
                    lower = bound;
                    continue;
                }
            }
            return bracket.base_tax + (taxable_income - lower) * bracket.rate;
        }

        // Not reached: validation guarantees an open-ended top tier.
        Decimal::ZERO
    }

    fn validate(brackets: &[TaxBracket]) -> Result<(), ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last = brackets.len() - 1;
        let mut lower = Decimal::ZERO;
        let mut cumulative = Decimal::ZERO;
        let mut prev_rate: Option<Decimal> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            match bracket.upper_bound {
                Some(bound) if bound <= lower => {
                    return Err(ScheduleError::BoundsNotIncreasing(index));
                }
                None if index != last => {
                    return Err(ScheduleError::UnboundedNotLast(index));
                }
                _ => {}
            }

            if bracket.rate <= Decimal::ZERO {
                return Err(ScheduleError::NonPositiveRate(index));
            }
            if let Some(prev) = prev_rate {
                if bracket.rate <= prev {
                    return Err(ScheduleError::RatesNotIncreasing(index));
                }
            }
            prev_rate = Some(bracket.rate);

            if bracket.base_tax != cumulative {
                return Err(ScheduleError::BaseTaxMismatch {
                    index,
                    expected: cumulative,
                    actual: bracket.base_tax,
                });
            }

            if let Some(bound) = bracket.upper_bound {
                cumulative += (bound - lower) * bracket.rate;
                lower = bound;
            }
        }

        if brackets[last].upper_bound.is_some() {
            return Err(ScheduleError::MissingOpenTier);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(
        upper_bound: Option<Decimal>,
        rate: Decimal,
        base_tax: Decimal,
    ) -> TaxBracket {
        TaxBracket {
            upper_bound,
            rate,
            base_tax,
        }
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn new_rejects_empty_schedule() {
        let result = BracketSchedule::new(vec![]);

        assert_eq!(result, Err(ScheduleError::Empty));
    }

    #[test]
    fn new_rejects_unbounded_bracket_before_last() {
        let result = BracketSchedule::new(vec![
            bracket(None, dec!(0.06), dec!(0)),
            bracket(Some(dec!(50000000)), dec!(0.15), dec!(840000)),
        ]);

        assert_eq!(result, Err(ScheduleError::UnboundedNotLast(0)));
    }

    #[test]
    fn new_rejects_bounded_top_tier() {
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(Some(dec!(50000000)), dec!(0.15), dec!(840000)),
        ]);

        assert_eq!(result, Err(ScheduleError::MissingOpenTier));
    }

    #[test]
    fn new_rejects_non_increasing_bounds() {
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(Some(dec!(14000000)), dec!(0.15), dec!(840000)),
            bracket(None, dec!(0.24), dec!(840000)),
        ]);

        assert_eq!(result, Err(ScheduleError::BoundsNotIncreasing(1)));
    }

    #[test]
    fn new_rejects_non_positive_rate() {
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0), dec!(0)),
            bracket(None, dec!(0.15), dec!(0)),
        ]);

        assert_eq!(result, Err(ScheduleError::NonPositiveRate(0)));
    }

    #[test]
    fn new_rejects_non_increasing_rates() {
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0.15), dec!(0)),
            bracket(None, dec!(0.15), dec!(2100000)),
        ]);

        assert_eq!(result, Err(ScheduleError::RatesNotIncreasing(1)));
    }

    #[test]
    fn new_rejects_nonzero_base_tax_on_first_bracket() {
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(100)),
            bracket(None, dec!(0.15), dec!(840100)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::BaseTaxMismatch {
                index: 0,
                expected: dec!(0),
                actual: dec!(100),
            })
        );
    }

    #[test]
    fn new_rejects_drifted_base_tax() {
        // Correct carried constant for the second tier is 840,000.
        let result = BracketSchedule::new(vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(Some(dec!(50000000)), dec!(0.15), dec!(840001)),
            bracket(None, dec!(0.24), dec!(6240001)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::BaseTaxMismatch {
                index: 1,
                expected: dec!(840000),
                actual: dec!(840001),
            })
        );
    }

    #[test]
    fn simplified_schedule_passes_validation() {
        let schedule = BracketSchedule::simplified();

        assert_eq!(schedule.brackets().len(), 4);
        assert_eq!(schedule.brackets()[3].upper_bound, None);
    }

    // =========================================================================
    // tax_for tests
    // =========================================================================

    #[test]
    fn tax_for_returns_zero_for_zero_income() {
        let schedule = BracketSchedule::simplified();

        assert_eq!(schedule.tax_for(dec!(0)), dec!(0));
    }

    #[test]
    fn tax_for_returns_zero_for_negative_income() {
        let schedule = BracketSchedule::simplified();

        assert_eq!(schedule.tax_for(dec!(-1000000)), dec!(0));
    }

    #[test]
    fn tax_for_first_tier() {
        let schedule = BracketSchedule::simplified();

        // 10,000,000 * 0.06
        assert_eq!(schedule.tax_for(dec!(10000000)), dec!(600000));
    }

    #[test]
    fn tax_for_second_tier() {
        let schedule = BracketSchedule::simplified();

        // 840,000 + (35,000,000 - 14,000,000) * 0.15
        assert_eq!(schedule.tax_for(dec!(35000000)), dec!(3990000));
    }

    #[test]
    fn tax_for_third_tier() {
        let schedule = BracketSchedule::simplified();

        // 6,240,000 + (60,000,000 - 50,000,000) * 0.24
        assert_eq!(schedule.tax_for(dec!(60000000)), dec!(8640000));
    }

    #[test]
    fn tax_for_top_tier() {
        let schedule = BracketSchedule::simplified();

        // 15,360,000 + (100,000,000 - 88,000,000) * 0.35
        assert_eq!(schedule.tax_for(dec!(100000000)), dec!(19560000));
    }

    #[test]
    fn income_exactly_at_a_bound_stays_in_the_lower_tier() {
        let schedule = BracketSchedule::simplified();

        // 14,000,000 * 0.06, not spilled into the 15% tier.
        assert_eq!(schedule.tax_for(dec!(14000000)), dec!(840000));
        assert_eq!(schedule.tax_for(dec!(50000000)), dec!(6240000));
        assert_eq!(schedule.tax_for(dec!(88000000)), dec!(15360000));
    }

    #[test]
    fn tax_is_continuous_across_each_bound() {
        let schedule = BracketSchedule::simplified();
        let epsilon = dec!(0.01);

        for bound in [dec!(14000000), dec!(50000000), dec!(88000000)] {
            let at = schedule.tax_for(bound);
            let above = schedule.tax_for(bound + epsilon);

            assert!(above > at);
            assert!(above - at < dec!(1));
        }
    }

    #[test]
    fn tax_is_monotonically_non_decreasing() {
        let schedule = BracketSchedule::simplified();
        let step = dec!(1000000);

        let mut income = Decimal::ZERO;
        let mut prev = schedule.tax_for(income);
        while income < dec!(200000000) {
            income += step;
            let tax = schedule.tax_for(income);

            assert!(tax >= prev, "tax decreased at income {income}");
            prev = tax;
        }
    }
}
