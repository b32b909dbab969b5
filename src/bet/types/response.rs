#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Fees charged on a bet or fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Fees {
    pub creator_fee: f64,
    pub platform_fee: f64,
    pub liquidity_fee: f64,
}

/// A partial or complete fill of a limit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Fill {
    /// ID of the bet matched against, or `None` when filled by the pool.
    pub matched_bet_id: Option<String>,
    pub amount: f64,
    pub shares: f64,
    /// Milliseconds since epoch.
    pub timestamp: i64,
    pub fees: Fees,
    pub is_sale: Option<bool>,
}

/// Properties specific to limit orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LimitProps {
    pub order_amount: f64,
    pub limit_prob: f64,
    pub is_filled: bool,
    pub is_cancelled: bool,
    #[serde(default)]
    pub fills: Vec<Fill>,
    /// Milliseconds since epoch.
    pub expires_at: Option<i64>,
}

/// A bet placed on a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bet {
    pub id: String,
    pub user_id: String,
    pub contract_id: String,
    /// Answer the bet is on, for multiple-choice markets.
    pub answer_id: Option<String>,
    /// Milliseconds since epoch.
    pub created_time: i64,
    pub updated_time: Option<i64>,
    pub amount: f64,
    pub loan_amount: Option<f64>,
    pub outcome: String,
    pub shares: f64,
    pub prob_before: f64,
    pub prob_after: f64,
    pub fees: Fees,
    pub is_api: Option<bool>,
    pub is_redemption: bool,
    pub reply_to_comment_id: Option<String>,
    pub bet_group_id: Option<String>,
    pub limit_props: Option<LimitProps>,
}
