//! Low-level HTTP binding — `PapertradeHttp`.
//!
//! One method per backend endpoint. Centralizes the cross-cutting pieces so
//! no view repeats them: the bearer credential goes on every request that
//! has one, the `{success, data}` envelope is unwrapped here, and a 401
//! clears the session and redirects to login before the error ever reaches
//! the caller.

use crate::auth::{LoginRequest, RegisterRequest, TokenData};
use crate::domain::order::{CancelOrderRequest, PlaceOrderRequest, StockTransaction};
use crate::domain::portfolio::PortfolioItem;
use crate::domain::stock::StockQuote;
use crate::domain::wallet::{AddFundsRequest, WalletBalance, WalletTransaction};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::nav::{Navigator, Route};
use crate::session::SessionStore;

use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response envelope every backend service wraps payloads in. The HTTP
/// status already signals success, so only `data` matters here.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, HttpError> {
        self.data.ok_or(HttpError::MissingData)
    }
}

/// Error body shapes seen across the backend services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

fn extract_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.message))
        .unwrap_or_default()
}

/// Shared request-issuing object, configured once per client.
#[derive(Clone)]
pub struct PapertradeHttp {
    base_url: String,
    client: Client,
    session: Arc<dyn SessionStore>,
    navigator: Arc<Navigator>,
}

impl PapertradeHttp {
    pub(crate) fn new(
        base_url: &str,
        session: Arc<dyn SessionStore>,
        navigator: Arc<Navigator>,
    ) -> Self {
        // No explicit timeout: the transport default applies.
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Authentication ───────────────────────────────────────────────────

    pub async fn login(&self, body: &LoginRequest) -> Result<TokenData, HttpError> {
        self.post("/authentication/login", body).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<TokenData, HttpError> {
        self.post("/authentication/register", body).await
    }

    // ── Transaction service ──────────────────────────────────────────────

    pub async fn get_stock_prices(&self, retry: RetryPolicy) -> Result<Vec<StockQuote>, HttpError> {
        self.get("/transaction/getStockPrices", retry).await
    }

    pub async fn get_stock_portfolio(
        &self,
        retry: RetryPolicy,
    ) -> Result<Vec<PortfolioItem>, HttpError> {
        self.get("/transaction/getStockPortfolio", retry).await
    }

    pub async fn get_wallet_balance(&self, retry: RetryPolicy) -> Result<WalletBalance, HttpError> {
        self.get("/transaction/getWalletBalance", retry).await
    }

    pub async fn get_wallet_transactions(
        &self,
        retry: RetryPolicy,
    ) -> Result<Vec<WalletTransaction>, HttpError> {
        self.get("/transaction/getWalletTransactions", retry).await
    }

    pub async fn get_stock_transactions(
        &self,
        retry: RetryPolicy,
    ) -> Result<Vec<StockTransaction>, HttpError> {
        self.get("/transaction/getStockTransactions", retry).await
    }

    pub async fn add_money_to_wallet(&self, body: &AddFundsRequest) -> Result<(), HttpError> {
        self.post_unit("/transaction/addMoneyToWallet", body).await
    }

    // ── Trading engine ───────────────────────────────────────────────────

    pub async fn place_stock_order(&self, body: &PlaceOrderRequest) -> Result<(), HttpError> {
        self.post_unit("/engine/placeStockOrder", body).await
    }

    pub async fn cancel_stock_transaction(
        &self,
        body: &CancelOrderRequest,
    ) -> Result<(), HttpError> {
        self.post_unit("/engine/cancelStockTransaction", body).await
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.request(Method::GET, path, None::<&()>).await?.into_data();
        };

        let mut last_error = None;
        for attempt in 0..=config.max_retries {
            match self.request(Method::GET, path, None::<&()>).await {
                Ok(envelope) => return envelope.into_data(),
                Err(e) => {
                    if attempt < config.max_retries && is_transient(&e, &config) {
                        let delay = config.delay_for(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            "retrying GET {}",
                            path
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::RetriesExhausted {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, path, Some(body)).await?.into_data()
    }

    /// POST whose envelope carries no payload worth keeping.
    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), HttpError> {
        self.request::<serde_json::Value, B>(Method::POST, path, Some(body))
            .await
            .map(|_| ())
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<T>, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.session.read() {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<Envelope<T>>().await?);
        }

        let code = status.as_u16();
        let text = resp.text().await.unwrap_or_default();

        if code == 401 {
            // Order matters: the credential is gone, then the redirect is
            // issued, and only then does the failure reach the caller.
            self.session.clear();
            self.navigator.navigate(Route::Login);
            tracing::info!("authentication failure on {}, session cleared", path);
            return Err(HttpError::Unauthorized);
        }

        if (400..500).contains(&code) {
            return Err(HttpError::Denied {
                status: code,
                detail: extract_detail(&text),
            });
        }

        Err(HttpError::ServerError {
            status: code,
            body: text,
        })
    }
}

fn is_transient(error: &HttpError, config: &RetryConfig) -> bool {
    match error {
        HttpError::ServerError { status, .. } => config.retry_on.contains(status),
        HttpError::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
        _ => false,
    }
}
