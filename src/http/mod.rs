//! HTTP layer — `PapertradeHttp` plus opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::PapertradeHttp;
pub use retry::{RetryConfig, RetryPolicy};
