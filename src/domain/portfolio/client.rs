//! Portfolio sub-client.

use crate::cache::{QueryOptions, Tag};
use crate::client::PapertradeClient;
use crate::domain::portfolio::PortfolioItem;
use crate::error::ClientError;

pub struct Portfolio<'a> {
    pub(crate) client: &'a PapertradeClient,
}

impl<'a> Portfolio<'a> {
    /// The user's current holdings. Cached under [`Tag::Portfolio`].
    pub async fn holdings(&self, options: &QueryOptions) -> Result<Vec<PortfolioItem>, ClientError> {
        let http = &self.client.http;
        let retry = options.retry.clone();
        self.client
            .cache
            .query(Tag::Portfolio, options, || async move {
                Ok(http.get_stock_portfolio(retry).await?)
            })
            .await
    }
}
