#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user and their score on a group leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trader {
    pub user_id: String,
    pub score: f64,
}

/// Cached leaderboard for a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Leaderboard {
    pub top_traders: Vec<Trader>,
    pub top_creators: Vec<Trader>,
}

/// A Manifold group (topic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Group {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Rich-text description, kept as raw JSON.
    pub about: Option<Value>,
    pub creator_id: String,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub anyone_can_join: Option<bool>,
    pub total_members: i64,
    #[serde(default)]
    pub post_ids: Vec<String>,
    pub cached_leaderboard: Option<Leaderboard>,
    pub banner_url: Option<String>,
    pub privacy_status: String,
    pub importance_score: f64,
}
