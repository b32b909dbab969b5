#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{TimestampMilliSeconds, serde_as, skip_serializing_none};

use crate::error::Error;
use crate::validate::{check_in_range, check_one_of};
use crate::Result;

const ALLOWED_KINDS: &[&str] = &["open-limit"];
const ALLOWED_ORDER: &[&str] = &["asc", "desc"];
const ALLOWED_OUTCOME: &[&str] = &["YES", "NO"];

/// Filters for `GET /bets`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BetsRequest {
    /// Only return bets placed by this user ID.
    #[builder(into)]
    pub user_id: Option<String>,
    /// Only return bets placed by this username.
    #[builder(into)]
    pub username: Option<String>,
    /// Only return bets on this market ID.
    #[builder(into)]
    pub contract_id: Option<String>,
    /// Only return bets on the market with this slug.
    #[builder(into)]
    pub contract_slug: Option<String>,
    /// Maximum number of bets to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Cursor: only return bets placed before the bet with this ID.
    #[builder(into)]
    pub before: Option<String>,
    /// Cursor: only return bets placed after the bet with this ID.
    #[builder(into)]
    pub after: Option<String>,
    /// Only return bets placed before this time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub before_time: Option<DateTime<Utc>>,
    /// Only return bets placed after this time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub after_time: Option<DateTime<Utc>>,
    /// Restrict results to a bet kind; only `open-limit` is recognized.
    #[builder(into)]
    pub kinds: Option<String>,
    /// Sort direction by placement time, `asc` or `desc`.
    #[builder(into)]
    pub order: Option<String>,
}

impl BetsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            check_in_range("limit", limit, 0, 1000)?;
        }

        if let Some(kinds) = &self.kinds {
            check_one_of("kinds", kinds, ALLOWED_KINDS)?;
        }

        if let Some(order) = &self.order {
            check_one_of("order", order, ALLOWED_ORDER)?;
        }

        Ok(())
    }
}

/// Body for `POST /bet`.
///
/// With `limit_prob` set this places a limit order that only fills at or
/// better than the given probability, optionally expiring at `expires_at`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlaceBetRequest {
    /// Amount of mana to bet. Must be positive.
    pub amount: f64,
    /// ID of the market to bet on.
    #[builder(into)]
    pub contract_id: String,
    /// Answer to bet on, for multiple-choice markets.
    #[builder(into)]
    pub answer_id: Option<String>,
    /// `YES` or `NO`.
    #[builder(into)]
    pub outcome: Option<String>,
    /// Probability threshold for a limit order, between 0 and 1.
    pub limit_prob: Option<f64>,
    /// Expiration time for a limit order; only legal alongside `limit_prob`
    /// and must be in the future.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Simulate the bet without placing it.
    pub dry_run: Option<bool>,
}

impl PlaceBetRequest {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0.0 {
            return Err(Error::validation(format!(
                "amount: invalid value {}, must be greater than 0",
                self.amount
            )));
        }

        if let Some(outcome) = &self.outcome {
            check_one_of("outcome", outcome, ALLOWED_OUTCOME)?;
        }

        if let Some(limit_prob) = self.limit_prob {
            check_in_range("limitProb", limit_prob, 0.0, 1.0)?;
        }

        if let Some(expires_at) = self.expires_at {
            if self.limit_prob.is_none() {
                return Err(Error::validation(
                    "expiresAt: only limit orders can have an expiration",
                ));
            }

            if expires_at <= Utc::now() {
                return Err(Error::validation(
                    "expiresAt: a limit order cannot expire in the past",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::error::{Kind, NotAllowed};

    fn bet() -> PlaceBetRequest {
        PlaceBetRequest::builder()
            .amount(10.0)
            .contract_id("contract-1")
            .build()
    }

    #[test]
    fn plain_bet_is_valid() {
        assert!(bet().validate().is_ok());
    }

    #[test]
    fn amount_must_be_positive() {
        let request = PlaceBetRequest::builder()
            .amount(0.0)
            .contract_id("contract-1")
            .build();

        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn outcome_must_be_yes_or_no() {
        let mut request = bet();
        request.outcome = Some("MAYBE".to_owned());

        let err = request.validate().unwrap_err();
        assert!(err.downcast_ref::<NotAllowed>().is_some());
    }

    #[test]
    fn limit_prob_must_be_a_probability() {
        let mut request = bet();
        request.limit_prob = Some(1.5);
        assert!(request.validate().is_err());

        request.limit_prob = Some(0.33);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn expires_at_requires_limit_prob() {
        let mut request = bet();
        request.expires_at = Some(Utc::now() + Duration::hours(1));

        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn expires_at_must_be_in_the_future() {
        let mut request = bet();
        request.limit_prob = Some(0.4);
        request.expires_at = Some(Utc::now() - Duration::hours(1));

        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn future_expiry_with_limit_prob_is_valid() {
        let mut request = bet();
        request.limit_prob = Some(0.4);
        request.expires_at = Some(Utc::now() + Duration::hours(1));

        assert!(request.validate().is_ok());
    }

    #[test]
    fn bets_filter_kinds_and_order_are_enumerated() {
        let request = BetsRequest::builder().kinds("open-limit").order("asc").build();
        assert!(request.validate().is_ok());

        let request = BetsRequest::builder().kinds("closed-limit").build();
        assert!(request.validate().is_err());
    }

    #[test]
    fn body_uses_wire_casing_and_native_numbers() {
        let mut request = bet();
        request.limit_prob = Some(0.25);

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "amount": 10.0,
                "contractId": "contract-1",
                "limitProb": 0.25,
            })
        );
    }
}
