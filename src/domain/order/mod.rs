//! Order domain — placed orders and their lifecycle as the engine reports it.

pub mod client;

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── OrderType ───────────────────────────────────────────────────────────────

/// Market orders execute at the current best price; limit orders rest on
/// the book at a user-chosen price and may fill over time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Market => write!(f, "Market"),
            OrderType::Limit => write!(f, "Limit"),
        }
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    InProgress,
    PartiallyComplete,
    Completed,
}

// ─── StockTransaction ────────────────────────────────────────────────────────

/// One order as the engine reports it.
///
/// `parent_tx_id` links a market fill triggered by a resting limit order to
/// that order; the linkage itself is engine behavior and only displayed
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockTransaction {
    pub stock_tx_id: i64,
    pub stock_id: i64,
    #[serde(default)]
    pub wallet_tx_id: Option<i64>,
    pub order_status: OrderStatus,
    pub is_buy: bool,
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub parent_tx_id: Option<i64>,
    #[serde(with = "serde_util::timestamp")]
    pub time_stamp: DateTime<Utc>,
    pub user_id: String,
}

impl StockTransaction {
    /// Only limit orders that have not completed can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        self.order_type == OrderType::Limit && self.order_status != OrderStatus::Completed
    }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `POST /engine/placeStockOrder`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceOrderRequest {
    pub stock_id: i64,
    pub is_buy: bool,
    pub order_type: OrderType,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body of `POST /engine/cancelStockTransaction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CancelOrderRequest {
    pub stock_tx_id: i64,
}
