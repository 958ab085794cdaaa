//! Year-end settlement estimate (간이 시뮬레이터 산식).
//!
//! Implements the simplified settlement computation:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross salary (총급여) |
//! | 2    | Total income deductions (소득공제 합계) |
//! | 3    | Taxable income (과세표준) = max(0, step 1 - step 2) |
//! | 4    | Computed tax (산출세액) = bracket schedule applied to step 3 |
//! | 5    | Total tax credits (세액공제 합계) |
//! | 6    | Final tax (결정세액) = max(0, step 4 - step 5) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use settlement_core::{BracketSchedule, SettlementCalculator, SettlementInput};
//!
//! let schedule = BracketSchedule::simplified();
//! let calculator = SettlementCalculator::new(&schedule);
//!
//! let result = calculator.compute(&SettlementInput {
//!     gross_salary: dec!(50000000),
//!     total_deductions: dec!(15000000),
//!     total_credits: dec!(1000000),
//! });
//!
//! assert_eq!(result.taxable_income, dec!(35000000));
//! assert_eq!(result.computed_tax, dec!(3990000));
//! assert_eq!(result.final_tax, dec!(2990000));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::calculations::schedule::BracketSchedule;
use crate::models::{SettlementInput, SettlementResult};

/// Calculator for the simplified settlement estimate.
///
/// Borrows a validated [`BracketSchedule`]; a single instance may be shared
/// across threads since computation never mutates anything.
#[derive(Debug, Clone)]
pub struct SettlementCalculator<'a> {
    schedule: &'a BracketSchedule,
}

impl<'a> SettlementCalculator<'a> {
    /// Creates a calculator over the given schedule.
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the settlement estimate for the given input.
    ///
    /// Negative amounts are clamped to zero before any subtraction, and
    /// every output is floored at zero, so the function is total and never
    /// fails for any input.
    pub fn compute(
        &self,
        input: &SettlementInput,
    ) -> SettlementResult {
        let gross_salary = max(input.gross_salary, Decimal::ZERO);
        let total_deductions = max(input.total_deductions, Decimal::ZERO);
        let total_credits = max(input.total_credits, Decimal::ZERO);

        let taxable_income = self.taxable_income(gross_salary, total_deductions);
        let computed_tax = self.schedule.tax_for(taxable_income);
        let final_tax = self.final_tax(computed_tax, total_credits);

        SettlementResult {
            taxable_income,
            computed_tax,
            final_tax,
        }
    }

    /// Taxable income: gross salary minus deductions, floored at zero.
    fn taxable_income(
        &self,
        gross_salary: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(gross_salary - total_deductions, Decimal::ZERO)
    }

    /// Final tax: computed tax minus credits, floored at zero.
    fn final_tax(
        &self,
        computed_tax: Decimal,
        total_credits: Decimal,
    ) -> Decimal {
        max(computed_tax - total_credits, Decimal::ZERO)
    }
}
