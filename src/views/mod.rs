//! Feature views — the form controllers and screen bindings behind the UI.
//!
//! Every form follows the same protocol: validate locally (no request is
//! sent on failure, the field errors say why), submit through the relevant
//! sub-client, close/reset on success, and post the server's detail message
//! (or a generic fallback) as a transient notice on failure.

pub mod cancel_order;
pub mod login;
pub mod order_ticket;
pub mod register;
pub mod screens;
pub mod wallet_topup;

pub use cancel_order::CancelOrderForm;
pub use login::LoginForm;
pub use order_ticket::OrderTicket;
pub use register::RegisterForm;
pub use screens::{DashboardScreen, HistoryScreen, StocksScreen, TradeScreen};
pub use wallet_topup::WalletTopUpForm;
