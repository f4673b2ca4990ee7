//! Registration screen controller.

use crate::client::PapertradeClient;
use crate::error::ClientError;
use crate::validate::{alphanumeric, evaluate, matching, required, FieldErrors};

/// State behind the registration form.
#[derive(Default)]
pub struct RegisterForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: FieldErrors,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and submit. A successful registration logs the user in and
    /// lands on the dashboard.
    pub async fn submit(&mut self, client: &PapertradeClient) -> Result<(), ClientError> {
        self.errors = evaluate([
            required("name", &self.name),
            required("username", &self.username),
            required("password", &self.password),
            required("confirm_password", &self.confirm_password),
        ]);
        if !self.errors.is_empty() {
            let message = "All fields must be filled out";
            client.notices().error(message);
            return Err(ClientError::Validation(message.to_string()));
        }

        self.errors = evaluate([
            alphanumeric("username", &self.username),
            matching(
                "confirm_password",
                &self.password,
                &self.confirm_password,
                "Passwords do not match",
            ),
        ]);
        if let Some(message) = self.errors.values().next().cloned() {
            client.notices().error(&message);
            return Err(ClientError::Validation(message));
        }

        match client
            .auth()
            .register(&self.username, &self.name, &self.password)
            .await
        {
            Ok(()) => {
                self.password.clear();
                self.confirm_password.clear();
                Ok(())
            }
            Err(e) => {
                client.notices().error(e.user_message());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_passwords_flagged() {
        let errors = evaluate([matching(
            "confirm_password",
            "secret",
            "secrte",
            "Passwords do not match",
        )]);
        assert_eq!(errors["confirm_password"], "Passwords do not match");
    }

    #[test]
    fn test_username_with_punctuation_flagged() {
        let errors = evaluate([alphanumeric("username", "al ice!")]);
        assert_eq!(errors["username"], "Only letters and numbers are allowed");
    }
}
