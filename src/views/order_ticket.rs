//! Buy/sell dialog controller.
//!
//! The ticket carries the quote it was opened from. A market order submits
//! the server-provided best price; toggling to a limit order reveals the
//! price field and submits the user's price instead.

use crate::client::PapertradeClient;
use crate::domain::order::{OrderType, PlaceOrderRequest};
use crate::domain::stock::StockQuote;
use crate::error::ClientError;
use crate::validate::{evaluate, parse_decimal, positive, positive_integer, FieldErrors};

pub struct OrderTicket {
    pub stock_id: i64,
    pub stock_name: String,
    /// Current best price at the time the dialog opened.
    pub best_price: rust_decimal::Decimal,
    pub is_buy: bool,
    pub order_type: OrderType,
    pub quantity: String,
    pub limit_price: String,
    pub open: bool,
    pub errors: FieldErrors,
}

impl OrderTicket {
    /// Open a purchase dialog for `quote`.
    pub fn buy(quote: &StockQuote) -> Self {
        Self::new(quote, true)
    }

    /// Open a sell dialog for `quote`.
    pub fn sell(quote: &StockQuote) -> Self {
        Self::new(quote, false)
    }

    fn new(quote: &StockQuote, is_buy: bool) -> Self {
        Self {
            stock_id: quote.stock_id,
            stock_name: quote.stock_name.clone(),
            best_price: quote.price,
            is_buy,
            order_type: OrderType::Market,
            quantity: String::new(),
            limit_price: String::new(),
            open: true,
            errors: FieldErrors::new(),
        }
    }

    /// Flip between market and limit.
    pub fn toggle_order_type(&mut self) {
        self.order_type = match self.order_type {
            OrderType::Market => OrderType::Limit,
            OrderType::Limit => OrderType::Market,
        };
    }

    /// Whether the price field is shown (limit orders only).
    pub fn price_field_visible(&self) -> bool {
        self.order_type == OrderType::Limit
    }

    /// Validate and place the order. Success closes the dialog.
    pub async fn submit(&mut self, client: &PapertradeClient) -> Result<(), ClientError> {
        let mut checks = vec![positive_integer("quantity", &self.quantity)];
        if self.order_type == OrderType::Limit {
            checks.push(positive("price", &self.limit_price));
        }
        self.errors = evaluate(checks);
        if !self.errors.is_empty() {
            return Err(ClientError::Validation("invalid order".to_string()));
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ClientError::Validation("invalid quantity".to_string()))?;
        let price = match self.order_type {
            OrderType::Limit => parse_decimal(&self.limit_price)
                .ok_or_else(|| ClientError::Validation("invalid price".to_string()))?,
            OrderType::Market => self.best_price,
        };

        let request = PlaceOrderRequest {
            stock_id: self.stock_id,
            is_buy: self.is_buy,
            order_type: self.order_type,
            quantity,
            price,
        };

        match client.orders().place(&request).await {
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

    /// Close the dialog, discarding input and field errors.
    pub fn close(&mut self) {
        self.quantity.clear();
        self.limit_price.clear();
        self.errors.clear();
        self.open = false;
    }
}
