//! Plain-text report rendering.
//!
//! Pure string builders so output can be asserted in tests without
//! spawning the binary.

use rust_decimal::{Decimal, RoundingStrategy};
use settlement_core::{BASIC_RATE_TABLE, SettlementInput, SettlementResult};

use crate::utils::format_won;

/// Salary share split for the estimate report.
struct SalaryShares {
    take_home: Decimal,
    tax_percent: Decimal,
    take_home_percent: Decimal,
}

/// `part / whole` as a percentage rounded to one decimal place.
fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Option<Decimal> {
    part.checked_div(whole).map(|ratio| {
        (ratio * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    })
}

fn salary_shares(
    gross_salary: Decimal,
    final_tax: Decimal,
) -> Option<SalaryShares> {
    if gross_salary <= Decimal::ZERO {
        return None;
    }
    let take_home = gross_salary - final_tax;

    Some(SalaryShares {
        take_home,
        tax_percent: percent_of(final_tax, gross_salary)?,
        take_home_percent: percent_of(take_home, gross_salary)?,
    })
}

/// Renders the estimate result: the three amounts, then the salary share
/// breakdown. The share section is omitted for a zero salary.
pub fn estimate_report(
    input: &SettlementInput,
    result: &SettlementResult,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "예상 과세표준: {} 원\n",
        format_won(result.taxable_income)
    ));
    out.push_str(&format!(
        "예상 산출세액: {} 원\n",
        format_won(result.computed_tax)
    ));
    out.push_str(&format!(
        "최종 결정세액: {} 원\n",
        format_won(result.final_tax)
    ));

    if let Some(shares) = salary_shares(input.gross_salary, result.final_tax) {
        out.push('\n');
        out.push_str("급여 대비 세금 비중\n");
        out.push_str(&format!(
            "  결정세액       {} 원 ({:.1}%)\n",
            format_won(result.final_tax),
            shares.tax_percent
        ));
        out.push_str(&format!(
            "  실수령액(예상) {} 원 ({:.1}%)\n",
            format_won(shares.take_home),
            shares.take_home_percent
        ));
    }

    out
}

/// Renders the 8-row basic rate reference table.
pub fn rate_table_report() -> String {
    let mut out = String::from("과세표준 구간별 기본 세율\n\n");
    out.push_str("세율(%)  과세표준 구간\n");
    for band in BASIC_RATE_TABLE {
        out.push_str(&format!("{:>6}   {}\n", band.rate_percent, band.bracket));
    }
    out
}
