//! Manifold comment endpoints and types.

pub mod client;
pub mod types;

pub use client::Client;
