//! Wallet domain — balance, funding, and the money side of every trade.

pub mod client;

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response of `GET /transaction/getWalletBalance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletBalance {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// A debit or credit against the wallet, linked to the stock transaction
/// that caused it (absent for plain top-ups).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletTransaction {
    pub wallet_tx_id: i64,
    pub is_debit: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "serde_util::timestamp")]
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub stock_tx_id: Option<i64>,
}

/// Body of `POST /transaction/addMoneyToWallet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFundsRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
