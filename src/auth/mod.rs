//! Authentication — wire types and the session lifecycle.
//!
//! The credential is an opaque bearer token owned by the
//! [`SessionStore`](crate::session::SessionStore): written here on a
//! successful login or registration, read by the HTTP binding on every
//! request, cleared on logout or when the backend reports an
//! authentication failure.

pub mod client;

use serde::{Deserialize, Serialize};

/// Body of `POST /authentication/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Body of `POST /authentication/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub name: String,
    pub password: String,
}

/// Token payload both authentication endpoints return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub token: String,
}
