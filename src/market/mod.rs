//! Manifold market endpoints and types.
//!
//! Covers listing and searching markets, reading a single market by ID or
//! slug, reading positions, creating markets of each outcome type, and the
//! market lifecycle operations (answer, liquidity, bounties, close, group
//! membership, resolution, selling shares).

pub mod client;
pub mod types;

pub use client::Client;
