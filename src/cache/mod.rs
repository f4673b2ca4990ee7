//! Server-state cache — tag-keyed query results with explicit invalidation.

pub mod store;

pub use store::{QueryCache, Subscription};

use crate::http::RetryPolicy;
use std::time::Duration;

/// Semantic tags grouping the server-state queries for invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Stocks,
    Portfolio,
    WalletBalance,
    WalletTx,
    StockTx,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Stocks => "stocks",
            Tag::Portfolio => "portfolio",
            Tag::WalletBalance => "wallet_balance",
            Tag::WalletTx => "wallet_tx",
            Tag::StockTx => "stock_tx",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-call query configuration.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Re-attempt transient failures. Off by default — nothing in the
    /// client retries unless asked to.
    pub retry: RetryPolicy,
    /// Override the cache-wide staleness window for this call.
    pub max_age: Option<Duration>,
}

impl QueryOptions {
    /// Options with the standard retry behavior enabled.
    pub fn retrying() -> Self {
        Self {
            retry: RetryPolicy::Standard,
            ..Self::default()
        }
    }
}

/// Snapshot of a cache entry, as delivered to subscribers.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// A fetch for this tag is in flight.
    pub loading: bool,
    /// The entry was invalidated (or has expired) and awaits a refetch.
    pub stale: bool,
    /// Last successfully fetched payload, if any.
    pub payload: Option<serde_json::Value>,
    /// Message from the most recent failed fetch, cleared on success.
    pub error: Option<String>,
}
