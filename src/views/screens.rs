//! Screen bindings — each screen subscribes to the cache tags it renders.
//!
//! A [`TagView`] is the observer half of the contract: it tracks the latest
//! snapshot for one tag and unsubscribes when the screen is torn down.
//! Loading data goes through the sub-clients as usual; the subscription
//! just keeps the screen's copy of the state current, including updates
//! caused by other screens' mutations.

use crate::cache::{QueryCache, QueryOptions, QueryState, Subscription, Tag};
use crate::client::PapertradeClient;
use crate::domain::order::StockTransaction;
use crate::domain::portfolio::PortfolioItem;
use crate::domain::stock::StockQuote;
use crate::domain::wallet::{WalletBalance, WalletTransaction};
use crate::error::ClientError;

use async_lock::Mutex;
use std::sync::Arc;

/// Live view of one cache tag.
pub struct TagView {
    state: Arc<Mutex<QueryState>>,
    _subscription: Subscription,
}

impl TagView {
    pub fn new(cache: &QueryCache, tag: Tag) -> Self {
        let state = Arc::new(Mutex::new(QueryState::default()));
        let sink = state.clone();
        let subscription = cache.subscribe(tag, move |_, snapshot| {
            *sink.lock_blocking() = snapshot.clone();
        });
        Self {
            state,
            _subscription: subscription,
        }
    }

    /// The most recent snapshot delivered to this view.
    pub fn current(&self) -> QueryState {
        self.state.lock_blocking().clone()
    }
}

// ─── Screens ─────────────────────────────────────────────────────────────────

/// Dashboard/home — the wallet balance card.
pub struct DashboardScreen {
    pub balance: TagView,
}

impl DashboardScreen {
    pub fn new(client: &PapertradeClient) -> Self {
        Self {
            balance: TagView::new(client.cache(), Tag::WalletBalance),
        }
    }

    pub async fn load(&self, client: &PapertradeClient) -> Result<WalletBalance, ClientError> {
        client.wallet().balance(&QueryOptions::default()).await
    }
}

/// Stock listing with purchase actions.
pub struct StocksScreen {
    pub quotes: TagView,
}

impl StocksScreen {
    pub fn new(client: &PapertradeClient) -> Self {
        Self {
            quotes: TagView::new(client.cache(), Tag::Stocks),
        }
    }

    pub async fn load(&self, client: &PapertradeClient) -> Result<Vec<StockQuote>, ClientError> {
        client.stocks().prices(&QueryOptions::default()).await
    }
}

/// Trade page — portfolio grid plus order history grid.
pub struct TradeScreen {
    pub holdings: TagView,
    pub transactions: TagView,
}

impl TradeScreen {
    pub fn new(client: &PapertradeClient) -> Self {
        Self {
            holdings: TagView::new(client.cache(), Tag::Portfolio),
            transactions: TagView::new(client.cache(), Tag::StockTx),
        }
    }

    pub async fn load(
        &self,
        client: &PapertradeClient,
    ) -> Result<(Vec<PortfolioItem>, Vec<StockTransaction>), ClientError> {
        let holdings = client.portfolio().holdings(&QueryOptions::default()).await?;
        let transactions = client.orders().transactions(&QueryOptions::default()).await?;
        Ok((holdings, transactions))
    }
}

/// History page — wallet and stock transaction grids.
pub struct HistoryScreen {
    pub wallet_transactions: TagView,
    pub stock_transactions: TagView,
}

impl HistoryScreen {
    pub fn new(client: &PapertradeClient) -> Self {
        Self {
            wallet_transactions: TagView::new(client.cache(), Tag::WalletTx),
            stock_transactions: TagView::new(client.cache(), Tag::StockTx),
        }
    }

    pub async fn load(
        &self,
        client: &PapertradeClient,
    ) -> Result<(Vec<WalletTransaction>, Vec<StockTransaction>), ClientError> {
        let wallet = client.wallet().transactions(&QueryOptions::default()).await?;
        let stock = client.orders().transactions(&QueryOptions::default()).await?;
        Ok((wallet, stock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_tag_view_tracks_cache_state() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let view = TagView::new(&cache, Tag::Stocks);
        assert!(view.current().payload.is_none());

        cache
            .query(Tag::Stocks, &QueryOptions::default(), || async {
                Ok(vec!["AAPL".to_string()])
            })
            .await
            .unwrap();

        let state = view.current();
        assert!(!state.loading);
        assert_eq!(state.payload, Some(serde_json::json!(["AAPL"])));
    }

    #[tokio::test]
    async fn test_tag_view_sees_invalidation() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let view = TagView::new(&cache, Tag::Portfolio);

        cache
            .query(Tag::Portfolio, &QueryOptions::default(), || async { Ok(1i64) })
            .await
            .unwrap();
        assert!(!view.current().stale);

        cache.invalidate(Tag::Portfolio).await;
        assert!(view.current().stale);
    }
}
