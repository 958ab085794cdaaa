use serde::Serialize;

/// One row of the informational basic rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BasicRateBand {
    /// Taxable income range label (과세표준 구간), as published.
    pub bracket: &'static str,

    /// Rate for the range, in percent.
    pub rate_percent: u8,
}

/// The 8-row basic rate table (기본 세율표) displayed alongside the
/// calculator.
///
/// Reference data only. It is intentionally more granular than the
/// four-tier schedule the calculator applies and is NOT derived from it;
/// the two are maintained independently and must only stay consistent
/// where their ranges overlap.
pub const BASIC_RATE_TABLE: [BasicRateBand; 8] = [
    BasicRateBand {
        bracket: "1,400만원 이하",
        rate_percent: 6,
    },
    BasicRateBand {
        bracket: "5,000만원 이하",
        rate_percent: 15,
    },
    BasicRateBand {
        bracket: "8,800만원 이하",
        rate_percent: 24,
    },
    BasicRateBand {
        bracket: "1.5억원 이하",
        rate_percent: 35,
    },
    BasicRateBand {
        bracket: "3억원 이하",
        rate_percent: 38,
    },
    BasicRateBand {
        bracket: "5억원 이하",
        rate_percent: 40,
    },
    BasicRateBand {
        bracket: "10억원 이하",
        rate_percent: 42,
    },
    BasicRateBand {
        bracket: "10억원 초과",
        rate_percent: 45,
    },
];
