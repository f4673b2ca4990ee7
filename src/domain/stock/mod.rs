//! Stock listing domain.

pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One listed stock with its current best price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockQuote {
    pub stock_id: i64,
    pub stock_name: String,
    /// Older backend iterations called this field `current_price`.
    #[serde(alias = "current_price", with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
