use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input values for a settlement estimate, all in won.
///
/// The calculator clamps negative values to zero before any subtraction,
/// so callers may pass any amounts; the UI layer is still expected to
/// refuse negative entries at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Annual gross salary (총급여).
    pub gross_salary: Decimal,

    /// Expected total income deductions (소득공제 합계).
    pub total_deductions: Decimal,

    /// Expected total tax credits (세액공제 합계).
    pub total_credits: Decimal,
}

/// Result of a settlement estimate.
///
/// Every field is non-negative by construction. Values are exact and
/// unrounded; whole-won rounding is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Taxable income after deductions (과세표준).
    pub taxable_income: Decimal,

    /// Tax from applying the bracket schedule, before credits (산출세액).
    pub computed_tax: Decimal,

    /// Computed tax minus credits, floored at zero (결정세액).
    pub final_tax: Decimal,
}
