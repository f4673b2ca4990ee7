//! High-level client — `PapertradeClient` with nested sub-client accessors.
//!
//! This is the one context object the whole app hangs off: session store,
//! navigator, server-state cache, and notice center are constructed once
//! here and every component reaches them through it. Cloning the client
//! clones handles, not state.

use crate::auth::client::Auth;
use crate::cache::QueryCache;
use crate::domain::order::client::Orders;
use crate::domain::portfolio::client::Portfolio;
use crate::domain::stock::client::Stocks;
use crate::domain::wallet::client::Wallet;
use crate::http::PapertradeHttp;
use crate::nav::Navigator;
use crate::network;
use crate::notify::NoticeCenter;
use crate::session::{FileSessionStore, SessionStore};

use std::sync::Arc;
use std::time::Duration;

/// The primary entry point for the Papertrade client.
///
/// Sub-client accessors per domain: `client.auth()`, `client.stocks()`,
/// `client.portfolio()`, `client.wallet()`, `client.orders()`.
#[derive(Clone)]
pub struct PapertradeClient {
    pub(crate) http: PapertradeHttp,
    pub(crate) cache: Arc<QueryCache>,
    pub(crate) session: Arc<dyn SessionStore>,
    pub(crate) navigator: Arc<Navigator>,
    pub(crate) notices: Arc<NoticeCenter>,
}

impl PapertradeClient {
    pub fn builder() -> PapertradeClientBuilder {
        PapertradeClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn stocks(&self) -> Stocks<'_> {
        Stocks { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Shared state ─────────────────────────────────────────────────────

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn notices(&self) -> &NoticeCenter {
        &self.notices
    }

    pub fn http(&self) -> &PapertradeHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PapertradeClientBuilder {
    base_url: String,
    session_store: Option<Arc<dyn SessionStore>>,
    cache_ttl: Duration,
    notice_ttl: Duration,
}

impl Default for PapertradeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::api_url_from_env(),
            session_store: None,
            cache_ttl: Duration::from_secs(60),
            notice_ttl: crate::notify::DEFAULT_DISMISS_AFTER,
        }
    }
}

impl PapertradeClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use a specific session store instead of the default file-backed one.
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Staleness window for cached queries.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// How long transient notices stay visible.
    pub fn notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn build(self) -> PapertradeClient {
        let session = self
            .session_store
            .unwrap_or_else(|| Arc::new(FileSessionStore::default()));
        let navigator = Arc::new(Navigator::new(session.clone()));
        let http = PapertradeHttp::new(&self.base_url, session.clone(), navigator.clone());

        PapertradeClient {
            http,
            cache: Arc::new(QueryCache::new(self.cache_ttl)),
            session,
            navigator,
            notices: Arc::new(NoticeCenter::new(self.notice_ttl)),
        }
    }
}
