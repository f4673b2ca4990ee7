//! Cancel-order dialog controller.

use crate::client::PapertradeClient;
use crate::domain::order::StockTransaction;
use crate::error::ClientError;

/// State behind the cancel-order confirmation dialog.
#[derive(Default)]
pub struct CancelOrderForm {
    pub stock_tx_id: Option<i64>,
    pub open: bool,
}

impl CancelOrderForm {
    /// Open the dialog for `transaction`, or `None` when it is not a
    /// cancellable order (only resting limit orders are).
    pub fn for_transaction(transaction: &StockTransaction) -> Option<Self> {
        transaction.is_cancellable().then(|| Self {
            stock_tx_id: Some(transaction.stock_tx_id),
            open: true,
        })
    }

    /// Submit the cancellation. With no target selected this is a no-op.
    pub async fn submit(&mut self, client: &PapertradeClient) -> Result<(), ClientError> {
        let Some(stock_tx_id) = self.stock_tx_id else {
            return Ok(());
        };

        match client.orders().cancel(stock_tx_id).await {
            Ok(()) => {
                self.close();
                Ok(())
            }
            Err(e) => {
                client.notices().error(e.user_message());
                Err(e)
            }
        }
    }

    pub fn close(&mut self) {
        self.stock_tx_id = None;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderStatus, OrderType};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn transaction(status: OrderStatus, order_type: OrderType) -> StockTransaction {
        StockTransaction {
            stock_tx_id: 7,
            stock_id: 1,
            wallet_tx_id: None,
            order_status: status,
            is_buy: false,
            order_type,
            stock_price: Decimal::from(100),
            quantity: 1,
            parent_tx_id: None,
            time_stamp: Utc::now(),
            user_id: "U001".to_string(),
        }
    }

    #[test]
    fn test_opens_for_resting_limit_order() {
        let form =
            CancelOrderForm::for_transaction(&transaction(OrderStatus::InProgress, OrderType::Limit))
                .unwrap();
        assert!(form.open);
        assert_eq!(form.stock_tx_id, Some(7));
    }

    #[test]
    fn test_refuses_completed_or_market_orders() {
        assert!(CancelOrderForm::for_transaction(&transaction(
            OrderStatus::Completed,
            OrderType::Limit
        ))
        .is_none());
        assert!(CancelOrderForm::for_transaction(&transaction(
            OrderStatus::InProgress,
            OrderType::Market
        ))
        .is_none());
    }
}
