#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A comment on a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Comment {
    pub id: String,
    pub reply_to_comment_id: Option<String>,
    pub user_id: String,
    /// Deprecated plain-text content; use `content` instead.
    pub text: Option<String>,
    /// TipTap rich-text content, kept as raw JSON.
    pub content: Option<Value>,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub user_name: String,
    pub user_username: String,
    pub user_avatar_url: Option<String>,
    pub likes: Option<i64>,
    pub hidden: Option<bool>,
    pub hidden_time: Option<i64>,
    pub hider_id: Option<String>,
    pub pinned: Option<bool>,
    pub pinned_time: Option<i64>,
    pub pinner_id: Option<String>,
    pub visibility: String,
    pub edited_time: Option<i64>,
    pub is_api: Option<bool>,
}
