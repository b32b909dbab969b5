#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A currency transaction between two entities (users, contracts, the bank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Txn {
    pub id: String,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub from_id: String,
    pub from_type: String,
    pub to_id: String,
    pub to_type: String,
    pub amount: f64,
    pub token: String,
    pub category: String,
    pub description: Option<String>,
    /// Category-specific extra data.
    pub data: Option<HashMap<String, Value>>,
}
