mod rate_table;
mod settlement;
mod tax_bracket;

pub use rate_table::{BASIC_RATE_TABLE, BasicRateBand};
pub use settlement::{SettlementInput, SettlementResult};
pub use tax_bracket::TaxBracket;
