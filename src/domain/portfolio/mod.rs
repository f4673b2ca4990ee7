//! Portfolio domain — the user's stock holdings.

pub mod client;

use serde::{Deserialize, Serialize};

/// One holding in the user's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioItem {
    pub stock_id: i64,
    pub stock_name: String,
    pub quantity_owned: u32,
}
