use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive bracket schedule.
///
/// `upper_bound` is inclusive; `None` marks the open-ended top tier.
/// `base_tax` is the exact cumulative tax owed on all lower tiers, carried
/// as constant data rather than re-derived at lookup time, so the schedule
/// stays continuous at every bracket boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}
