#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Essential fields of a market, as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LiteMarket {
    pub id: String,
    pub creator_id: String,
    pub creator_username: String,
    pub creator_name: String,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub creator_avatar_url: Option<String>,
    pub close_time: Option<i64>,
    pub question: String,
    pub slug: String,
    pub url: String,
    /// `BINARY`, `MULTIPLE_CHOICE`, `PSEUDO_NUMERIC`, and so on.
    pub outcome_type: String,
    /// Market maker mechanism, e.g. `cpmm-1`.
    pub mechanism: String,
    pub pool: Option<HashMap<String, f64>>,
    pub probability: Option<f64>,
    /// CPMM liquidity weighting.
    pub p: Option<f64>,
    pub total_liquidity: Option<f64>,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub volume: f64,
    pub volume24_hours: f64,
    pub is_resolved: bool,
    pub resolution: Option<String>,
    pub resolution_time: Option<i64>,
    pub resolution_probability: Option<f64>,
    pub unique_bettor_count: i64,
    pub last_updated_time: Option<i64>,
    pub last_bet_time: Option<i64>,
    pub market_tier: Option<String>,
}

/// A poll option and its vote count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PollOption {
    pub text: String,
    pub votes: i64,
}

/// Probability movement over standard windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProbChanges {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

/// An answer on a multiple-choice or free-response market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Answer {
    pub id: String,
    pub index: i64,
    pub contract_id: String,
    pub user_id: String,
    pub text: String,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub color: Option<String>,
    pub pool_yes: f64,
    pub pool_no: f64,
    pub prob: f64,
    pub total_liquidity: f64,
    pub subsidy_pool: f64,
    pub is_other: Option<bool>,
    pub resolution: Option<String>,
    pub resolution_time: Option<i64>,
    pub resolution_probability: Option<f64>,
    pub resolver_id: Option<String>,
    pub prob_changes: Option<ProbChanges>,
    pub lover_user_id: Option<String>,
}

/// The API projection of an [`Answer`], with pool and probability adjusted
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiAnswer {
    #[serde(flatten)]
    pub answer: Answer,
    pub probability: f64,
    pub pool: Option<HashMap<String, f64>>,
}

/// A comprehensive view of a market, extending [`LiteMarket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FullMarket {
    #[serde(flatten)]
    pub lite: LiteMarket,
    pub answers: Option<Vec<ApiAnswer>>,
    pub should_answers_sum_to_one: Option<bool>,
    /// `ANYONE`, `ONLY_CREATOR`, or `DISABLED`.
    pub add_answers_mode: Option<String>,
    /// Poll options and their votes.
    pub options: Option<Vec<PollOption>>,
    pub total_bounty: Option<f64>,
    pub bounty_left: Option<f64>,
    /// Rich-text description, kept as raw JSON.
    pub description: Option<Value>,
    pub text_description: Option<String>,
    pub cover_image_url: Option<String>,
    pub group_slugs: Option<Vec<String>>,
}

/// Profit and investment figures for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PeriodMetrics {
    pub profit: f64,
    pub profit_percent: f64,
    pub invested: f64,
    pub prev_value: f64,
    pub value: f64,
}

/// A user's position in one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContractMetric {
    pub contract_id: String,
    /// Period metrics keyed by window (`day`, `week`, `month`).
    pub from: Option<HashMap<String, PeriodMetrics>>,
    pub has_no_shares: bool,
    pub has_shares: bool,
    pub has_yes_shares: bool,
    pub invested: f64,
    pub loan: Option<f64>,
    pub max_shares_outcome: Option<String>,
    pub payout: f64,
    pub profit: f64,
    pub profit_percent: f64,
    pub total_shares: HashMap<String, f64>,
    pub user_id: String,
    pub user_username: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar_url: Option<String>,
    pub last_bet_time: i64,
    pub answer_id: Option<String>,
    pub profit_adjustment: Option<f64>,
}
