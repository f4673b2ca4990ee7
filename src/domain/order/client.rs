//! Orders sub-client — place, cancel, history.
//!
//! The invalidation sets mirror what each operation can change on the
//! server: a filled order moves stock, money, and both histories; a
//! cancellation only touches the order book side.

use crate::cache::{QueryOptions, Tag};
use crate::client::PapertradeClient;
use crate::domain::order::{CancelOrderRequest, PlaceOrderRequest, StockTransaction};
use crate::error::ClientError;

pub struct Orders<'a> {
    pub(crate) client: &'a PapertradeClient,
}

impl<'a> Orders<'a> {
    /// The user's order history. Cached under [`Tag::StockTx`].
    pub async fn transactions(
        &self,
        options: &QueryOptions,
    ) -> Result<Vec<StockTransaction>, ClientError> {
        let http = &self.client.http;
        let retry = options.retry.clone();
        self.client
            .cache
            .query(Tag::StockTx, options, || async move {
                Ok(http.get_stock_transactions(retry).await?)
            })
            .await
    }

    /// Submit an order to the engine.
    pub async fn place(&self, request: &PlaceOrderRequest) -> Result<(), ClientError> {
        self.client
            .cache
            .mutate(
                &[Tag::Portfolio, Tag::WalletTx, Tag::StockTx, Tag::Stocks],
                || async { Ok(self.client.http.place_stock_order(request).await?) },
            )
            .await
    }

    /// Cancel a resting limit order by its transaction id.
    pub async fn cancel(&self, stock_tx_id: i64) -> Result<(), ClientError> {
        let request = CancelOrderRequest { stock_tx_id };
        self.client
            .cache
            .mutate(&[Tag::StockTx, Tag::Portfolio], || async {
                Ok(self.client.http.cancel_stock_transaction(&request).await?)
            })
            .await
    }
}
