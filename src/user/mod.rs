//! Manifold user endpoints and types.
//!
//! Covers listing users, looking a user up by username or ID (full or lite
//! projection), and fetching the authenticated user via `/me`.

pub mod client;
pub mod types;

pub use client::Client;
