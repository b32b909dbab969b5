//! Manifold bet endpoints and types.
//!
//! Covers listing bets, placing market and limit orders, and cancelling open
//! limit orders.

pub mod client;
pub mod types;

pub use client::Client;
