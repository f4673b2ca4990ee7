//! Wallet top-up dialog controller.

use crate::client::PapertradeClient;
use crate::error::ClientError;
use crate::validate::{evaluate, parse_decimal, positive, FieldErrors};

/// State behind the "add funds" dialog.
#[derive(Default)]
pub struct WalletTopUpForm {
    pub amount: String,
    pub open: bool,
    pub errors: FieldErrors,
}

impl WalletTopUpForm {
    pub fn new() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Validate and submit the top-up. Success closes the dialog; the
    /// cached balance is refetched on the next read.
    pub async fn submit(&mut self, client: &PapertradeClient) -> Result<(), ClientError> {
        self.errors = evaluate([positive("amount", &self.amount)]);
        if !self.errors.is_empty() {
            return Err(ClientError::Validation("invalid amount".to_string()));
        }

        let amount = parse_decimal(&self.amount)
            .ok_or_else(|| ClientError::Validation("invalid amount".to_string()))?;

        match client.wallet().add_funds(amount).await {
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
        self.amount.clear();
        self.errors.clear();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_amounts() {
        for bad in ["", "0", "-10", "abc"] {
            let errors = evaluate([positive("amount", bad)]);
            assert_eq!(errors["amount"], "Must be greater than 0", "input: {bad:?}");
        }
    }
}
