#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Cached profit figures over standard windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProfitCached {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub all_time: f64,
}

/// A Manifold user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct User {
    pub id: String,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub name: String,
    pub username: String,
    pub url: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub banner_url: Option<String>,
    pub website: Option<String>,
    pub twitter_handle: Option<String>,
    pub discord_handle: Option<String>,
    pub is_bot: Option<bool>,
    pub is_admin: Option<bool>,
    pub is_trustworthy: Option<bool>,
    pub is_banned_from_posting: Option<bool>,
    pub user_deleted: Option<bool>,
    pub balance: f64,
    pub total_deposits: f64,
    pub last_bet_time: Option<i64>,
    pub current_betting_streak: Option<i64>,
    pub profit_cached: ProfitCached,
}

/// A reduced user projection returned by the `/lite` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisplayUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
}
