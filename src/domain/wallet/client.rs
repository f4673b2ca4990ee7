//! Wallet sub-client — balance, transaction history, top-ups.

use crate::cache::{QueryOptions, Tag};
use crate::client::PapertradeClient;
use crate::domain::wallet::{AddFundsRequest, WalletBalance, WalletTransaction};
use crate::error::ClientError;

use rust_decimal::Decimal;

pub struct Wallet<'a> {
    pub(crate) client: &'a PapertradeClient,
}

impl<'a> Wallet<'a> {
    /// Current balance. Cached under [`Tag::WalletBalance`].
    pub async fn balance(&self, options: &QueryOptions) -> Result<WalletBalance, ClientError> {
        let http = &self.client.http;
        let retry = options.retry.clone();
        self.client
            .cache
            .query(Tag::WalletBalance, options, || async move {
                Ok(http.get_wallet_balance(retry).await?)
            })
            .await
    }

    /// Debit/credit history. Cached under [`Tag::WalletTx`].
    pub async fn transactions(
        &self,
        options: &QueryOptions,
    ) -> Result<Vec<WalletTransaction>, ClientError> {
        let http = &self.client.http;
        let retry = options.retry.clone();
        self.client
            .cache
            .query(Tag::WalletTx, options, || async move {
                Ok(http.get_wallet_transactions(retry).await?)
            })
            .await
    }

    /// Add funds to the wallet; invalidates the cached balance on success.
    pub async fn add_funds(&self, amount: Decimal) -> Result<(), ClientError> {
        let request = AddFundsRequest { amount };
        self.client
            .cache
            .mutate(&[Tag::WalletBalance], || async {
                Ok(self.client.http.add_money_to_wallet(&request).await?)
            })
            .await
    }
}
