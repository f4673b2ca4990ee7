//! Login screen controller.

use crate::client::PapertradeClient;
use crate::error::ClientError;
use crate::validate::{evaluate, required, FieldErrors};

/// State behind the login form.
#[derive(Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and submit. On success the auth sub-client has already
    /// stored the token and navigated to the dashboard.
    pub async fn submit(&mut self, client: &PapertradeClient) -> Result<(), ClientError> {
        self.errors = evaluate([
            required("username", &self.username),
            required("password", &self.password),
        ]);
        if !self.errors.is_empty() {
            let message = "All fields must be filled out";
            client.notices().error(message);
            return Err(ClientError::Validation(message.to_string()));
        }

        match client.auth().login(&self.username, &self.password).await {
            Ok(()) => {
                self.password.clear();
                Ok(())
            }
            Err(e) => {
                client.notices().error(e.user_message());
                Err(e)
            }
        }
    }
}
