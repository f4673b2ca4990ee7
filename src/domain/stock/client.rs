//! Stocks sub-client — the listing every trade starts from.

use crate::cache::{QueryOptions, Tag};
use crate::client::PapertradeClient;
use crate::domain::stock::StockQuote;
use crate::error::ClientError;

pub struct Stocks<'a> {
    pub(crate) client: &'a PapertradeClient,
}

impl<'a> Stocks<'a> {
    /// Current prices for every listed stock. Cached under [`Tag::Stocks`].
    pub async fn prices(&self, options: &QueryOptions) -> Result<Vec<StockQuote>, ClientError> {
        let http = &self.client.http;
        let retry = options.retry.clone();
        self.client
            .cache
            .query(Tag::Stocks, options, || async move {
                Ok(http.get_stock_prices(retry).await?)
            })
            .await
    }
}
