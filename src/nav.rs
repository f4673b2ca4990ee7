//! Routes and the navigation guard.
//!
//! Navigation state lives in one [`Navigator`] shared by the whole client.
//! The guard runs once per `navigate` call: anyone may reach the login and
//! registration screens, everything else requires a stored credential.
//! This is a client-side convenience only — authorization proper stays with
//! the backend.

use crate::session::SessionStore;

use async_lock::Mutex;
use std::sync::Arc;

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Stocks,
    Trade,
    Account,
    History,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Stocks => "/stocks",
            Route::Trade => "/trade",
            Route::Account => "/account",
            Route::History => "/history",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/stocks" => Some(Route::Stocks),
            "/trade" => Some(Route::Trade),
            "/account" => Some(Route::Account),
            "/history" => Some(Route::History),
            _ => None,
        }
    }

    /// Reachable without a credential.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Process-wide navigation state plus the route guard.
pub struct Navigator {
    session: Arc<dyn SessionStore>,
    current: Mutex<Route>,
    visited: Mutex<Vec<Route>>,
}

impl Navigator {
    /// Starts on the dashboard when a credential is already stored,
    /// otherwise on the login screen.
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        let start = if session.read().is_some() {
            Route::Home
        } else {
            Route::Login
        };
        Self {
            session,
            current: Mutex::new(start),
            visited: Mutex::new(vec![start]),
        }
    }

    /// Navigate to `to`, applying the guard. Returns the route actually
    /// reached — `Route::Login` when the guard redirected.
    pub fn navigate(&self, to: Route) -> Route {
        let destination = if to.is_public() || self.session.read().is_some() {
            to
        } else {
            tracing::debug!(destination = %to, "no credential, redirecting to login");
            Route::Login
        };
        *self.current.lock_blocking() = destination;
        self.visited.lock_blocking().push(destination);
        destination
    }

    pub fn current(&self) -> Route {
        *self.current.lock_blocking()
    }

    /// Every route reached so far, in order, starting route included.
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock_blocking().clone()
    }
}
