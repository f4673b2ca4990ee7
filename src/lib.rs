//! # Papertrade client
//!
//! The client-side coordination layer of the Papertrade stock-trading
//! application: session persistence, authenticated HTTP plumbing, a
//! tag-keyed server-state cache, the route guard, and the form controllers
//! behind every screen.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — shared serde helpers, domain types, errors
//! 2. **Session & navigation** — the persisted credential and the guard
//! 3. **HTTP** — `PapertradeHttp`: bearer attach, envelope unwrap, global
//!    401 handling, opt-in retries
//! 4. **Cache** — `QueryCache`: staleness window, single-flight
//!    de-duplication, tag invalidation, observer subscriptions
//! 5. **High-level client** — `PapertradeClient` with nested sub-clients,
//!    plus the `views` form controllers on top
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use papertrade_client::prelude::*;
//!
//! let client = PapertradeClient::builder()
//!     .base_url("http://localhost:3001")
//!     .build();
//!
//! client.auth().login("alice", "secret").await?;
//! let stocks = client.stocks().prices(&QueryOptions::default()).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types + sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Backend URL configuration.
pub mod network;

// ── Layer 2: Session & navigation ────────────────────────────────────────────

/// Persisted session store.
pub mod session;

/// Routes and the navigation guard.
pub mod nav;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP binding with opt-in retry policies.
pub mod http;

// ── Layer 4: Server-state cache ──────────────────────────────────────────────

/// Tag-keyed query cache with explicit invalidation.
pub mod cache;

// ── Layer 5: High-level client and views ─────────────────────────────────────

/// Authentication wire types and sub-client.
pub mod auth;

/// `PapertradeClient` — the primary entry point.
pub mod client;

/// Form controllers and screen bindings.
pub mod views;

/// Field validation rules.
pub mod validate;

/// Transient user notifications.
pub mod notify;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Client
    pub use crate::client::{PapertradeClient, PapertradeClientBuilder};

    // Domain types
    pub use crate::domain::order::{
        CancelOrderRequest, OrderStatus, OrderType, PlaceOrderRequest, StockTransaction,
    };
    pub use crate::domain::portfolio::PortfolioItem;
    pub use crate::domain::stock::StockQuote;
    pub use crate::domain::wallet::{WalletBalance, WalletTransaction};

    // Auth
    pub use crate::auth::{LoginRequest, RegisterRequest, TokenData};

    // Cache
    pub use crate::cache::{QueryCache, QueryOptions, QueryState, Subscription, Tag};

    // Session & navigation
    pub use crate::nav::{Navigator, Route};
    pub use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};

    // Errors
    pub use crate::error::{ClientError, HttpError};

    // HTTP
    pub use crate::http::{PapertradeHttp, RetryConfig, RetryPolicy};

    // Views
    pub use crate::notify::{Notice, NoticeCenter, Severity};
    pub use crate::views::{
        CancelOrderForm, DashboardScreen, HistoryScreen, LoginForm, OrderTicket, RegisterForm,
        StocksScreen, TradeScreen, WalletTopUpForm,
    };

    // Network
    pub use crate::network::{DEFAULT_API_URL, API_URL_ENV};
}
