//! Domain modules organized as vertical slices.
//!
//! Each sub-module holds the serde types for one slice of backend state
//! plus a `client.rs` sub-client that binds them to the cache and the HTTP
//! layer. The client never fabricates or mutates these entities — every
//! value shown is the last server snapshot.

pub mod order;
pub mod portfolio;
pub mod stock;
pub mod wallet;
