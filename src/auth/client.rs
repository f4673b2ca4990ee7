//! Auth sub-client — login, register, logout.

use crate::auth::{LoginRequest, RegisterRequest};
use crate::client::PapertradeClient;
use crate::error::ClientError;
use crate::nav::Route;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a PapertradeClient,
}

impl<'a> Auth<'a> {
    /// Log in; on success the token is persisted and the app navigates to
    /// the dashboard, in that order.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let request = LoginRequest {
            user_name: username.to_string(),
            password: password.to_string(),
        };
        let data = self.client.http.login(&request).await?;
        self.client.session.save(&data.token);
        self.client.navigator.navigate(Route::Home);
        tracing::info!(%username, "logged in");
        Ok(())
    }

    /// Register a new account. The backend returns a token straight away,
    /// so a successful registration also logs the user in.
    pub async fn register(
        &self,
        username: &str,
        name: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = RegisterRequest {
            user_name: username.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };
        let data = self.client.http.register(&request).await?;
        self.client.session.save(&data.token);
        self.client.navigator.navigate(Route::Home);
        tracing::info!(%username, "registered");
        Ok(())
    }

    /// Drop the credential and return to the login screen. No server call
    /// is involved; the token simply stops being presented.
    pub fn logout(&self) {
        self.client.session.clear();
        self.client.navigator.navigate(Route::Login);
        tracing::info!("logged out");
    }

    /// Whether a credential is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.session.read().is_some()
    }
}
