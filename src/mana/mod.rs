//! Manifold mana transfer (managram) endpoints and types.

pub mod client;
pub mod types;

pub use client::Client;
