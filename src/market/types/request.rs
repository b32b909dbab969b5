#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{TimestampMilliSeconds, serde_as, skip_serializing_none};

use crate::Result;
use crate::error::Error;
use crate::validate::{check_in_range, check_one_of};

const ALLOWED_MARKETS_SORT: &[&str] = &[
    "created-time",
    "updated-time",
    "last-bet-time",
    "last-comment-time",
];

const ALLOWED_SEARCH_SORT: &[&str] = &[
    "newest",
    "score",
    "daily-score",
    "freshness-score",
    "24-hour-vol",
    "most-popular",
    "liquidity",
    "subsidy",
    "last-updated",
    "close-date",
    "resolve-date",
    "random",
    "bounty-amount",
    "prob-descending",
    "prob-ascending",
];

const ALLOWED_SEARCH_FILTER: &[&str] = &[
    "all",
    "open",
    "closed",
    "resolved",
    "closing-this-month",
    "closing-next-month",
];

const ALLOWED_SEARCH_CONTRACT_TYPE: &[&str] = &[
    "ALL",
    "BINARY",
    "MULTIPLE_CHOICE",
    "FREE-RESPONSE",
    "PSEUDO-NUMERIC",
    "BOUNTIED_QUESTION",
    "STONK",
    "POLL",
    "NUMBER",
];

const ALLOWED_ORDER: &[&str] = &["asc", "desc"];
const ALLOWED_VISIBILITY: &[&str] = &["public", "unlisted"];

fn check_close_time(close_time: Option<DateTime<Utc>>) -> Result<()> {
    if let Some(close_time) = close_time {
        if close_time <= Utc::now() {
            return Err(Error::validation("closeTime cannot be in the past"));
        }
    }

    Ok(())
}

fn check_visibility(visibility: Option<&str>) -> Result<()> {
    if let Some(visibility) = visibility {
        check_one_of("visibility", visibility, ALLOWED_VISIBILITY)?;
    }

    Ok(())
}

fn check_positive_amount(amount: f64) -> Result<()> {
    if amount <= 0.0 {
        return Err(Error::validation(format!(
            "amount: invalid value {amount}, must be greater than 0"
        )));
    }

    Ok(())
}

/// Filters for `GET /markets`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketsRequest {
    /// Maximum number of markets to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Sort key: `created-time`, `updated-time`, `last-bet-time`, or
    /// `last-comment-time`.
    #[builder(into)]
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`.
    #[builder(into)]
    pub order: Option<String>,
    /// Cursor: only return markets created before the market with this ID.
    #[builder(into)]
    pub before: Option<String>,
    /// Only return markets created by this user ID.
    #[serde(rename = "userID")]
    #[builder(into)]
    pub user_id: Option<String>,
    /// Only return markets belonging to this group ID.
    #[serde(rename = "groupID")]
    #[builder(into)]
    pub group_id: Option<String>,
}

impl MarketsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            check_in_range("limit", limit, 0, 1000)?;
        }

        if let Some(sort) = &self.sort {
            check_one_of("sort", sort, ALLOWED_MARKETS_SORT)?;
        }

        if let Some(order) = &self.order {
            check_one_of("order", order, ALLOWED_ORDER)?;
        }

        Ok(())
    }
}

/// Parameters for `GET /search-markets`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchRequest {
    /// Search term. May be empty to match everything.
    #[builder(into)]
    pub term: String,
    /// Sort key, e.g. `newest` or `score`.
    #[builder(into)]
    pub sort: Option<String>,
    /// Market state filter, e.g. `open` or `resolved`.
    #[builder(into)]
    pub filter: Option<String>,
    /// Market type filter, e.g. `BINARY` or `POLL`.
    #[builder(into)]
    pub contract_type: Option<String>,
    /// Only return markets under this topic slug.
    #[builder(into)]
    pub topic_slug: Option<String>,
    /// Only return markets created by this user ID.
    #[builder(into)]
    pub creator_id: Option<String>,
    /// Maximum number of markets to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Number of markets to skip. Must not be negative.
    pub offset: Option<i64>,
}

impl SearchRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(sort) = &self.sort {
            check_one_of("sort", sort, ALLOWED_SEARCH_SORT)?;
        }

        if let Some(filter) = &self.filter {
            check_one_of("filter", filter, ALLOWED_SEARCH_FILTER)?;
        }

        if let Some(contract_type) = &self.contract_type {
            check_one_of("contractType", contract_type, ALLOWED_SEARCH_CONTRACT_TYPE)?;
        }

        if let Some(limit) = self.limit {
            check_in_range("limit", limit, 0, 1000)?;
        }

        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(Error::validation(format!(
                    "offset: invalid value {offset}, must be 0 or greater"
                )));
            }
        }

        Ok(())
    }
}

/// Body for `POST /market` with outcome type `BINARY`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBinaryRequest {
    /// Question the market is based on.
    #[builder(into)]
    pub question: String,
    /// Initial probability, between 1 and 99.
    pub initial_prob: i64,
    /// Market description.
    #[builder(into)]
    pub description: Option<String>,
    /// When the market closes. Must be in the future.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub close_time: Option<DateTime<Utc>>,
    /// `public` or `unlisted`.
    #[builder(into)]
    pub visibility: Option<String>,
    /// Extra liquidity to subsidize the market with.
    pub extra_liquidity: Option<i64>,
}

impl CreateBinaryRequest {
    pub fn validate(&self) -> Result<()> {
        check_in_range("initialProb", self.initial_prob, 1, 99)?;
        check_close_time(self.close_time)?;
        check_visibility(self.visibility.as_deref())
    }
}

/// Body for `POST /market` with outcome type `PSEUDO_NUMERIC`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreatePseudoNumericRequest {
    /// Question the market is based on.
    #[builder(into)]
    pub question: String,
    /// Minimum value the market can resolve to.
    pub min: i64,
    /// Maximum value the market can resolve to.
    pub max: i64,
    /// Initial value, strictly between `min` and `max`.
    pub initial_value: i64,
    /// Whether the market scales logarithmically.
    pub is_log_scale: bool,
    /// Market description.
    #[builder(into)]
    pub description: Option<String>,
    /// When the market closes. Must be in the future.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub close_time: Option<DateTime<Utc>>,
    /// `public` or `unlisted`.
    #[builder(into)]
    pub visibility: Option<String>,
    /// Extra liquidity to subsidize the market with.
    pub extra_liquidity: Option<i64>,
}

impl CreatePseudoNumericRequest {
    pub fn validate(&self) -> Result<()> {
        // Exclusive on both ends.
        check_in_range(
            "initialValue",
            self.initial_value,
            self.min + 1,
            self.max - 1,
        )?;
        check_close_time(self.close_time)?;
        check_visibility(self.visibility.as_deref())
    }
}

/// Body for `POST /market` with outcome type `POLL`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreatePollRequest {
    /// Question the poll is based on.
    #[builder(into)]
    pub question: String,
    /// Poll options. At least two are required.
    pub answers: Vec<String>,
    /// Poll description.
    #[builder(into)]
    pub description: Option<String>,
    /// When the poll closes. Must be in the future.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub close_time: Option<DateTime<Utc>>,
    /// `public` or `unlisted`.
    #[builder(into)]
    pub visibility: Option<String>,
}

impl CreatePollRequest {
    pub fn validate(&self) -> Result<()> {
        if self.answers.len() < 2 {
            return Err(Error::validation("answers: at least two answers are required"));
        }

        check_close_time(self.close_time)?;
        check_visibility(self.visibility.as_deref())
    }
}

/// Body for `POST /market` with outcome type `BOUNTIED_QUESTION`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBountiedQuestionRequest {
    /// Question the bounty is attached to.
    #[builder(into)]
    pub question: String,
    /// Total bounty to fund the question with. Must be positive.
    pub total_bounty: i64,
    /// Market description.
    #[builder(into)]
    pub description: Option<String>,
    /// When the market closes. Must be in the future.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub close_time: Option<DateTime<Utc>>,
    /// `public` or `unlisted`.
    #[builder(into)]
    pub visibility: Option<String>,
}

impl CreateBountiedQuestionRequest {
    pub fn validate(&self) -> Result<()> {
        if self.total_bounty <= 0 {
            return Err(Error::validation(format!(
                "totalBounty: invalid value {}, must be greater than 0",
                self.total_bounty
            )));
        }

        check_close_time(self.close_time)?;
        check_visibility(self.visibility.as_deref())
    }
}

/// Body for `POST /market/{id}/answer`.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct AnswerRequest {
    /// Market to add the answer to.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Answer text.
    #[builder(into)]
    pub text: String,
}

/// Body for `POST /market/{id}/add-liquidity`.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct AddLiquidityRequest {
    /// Market to subsidize.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Amount of mana to add. Must be positive.
    pub amount: f64,
}

impl AddLiquidityRequest {
    pub fn validate(&self) -> Result<()> {
        check_positive_amount(self.amount)
    }
}

/// Body for `POST /market/{id}/add-bounty`.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct AddBountyRequest {
    /// Bountied question to add to.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Amount of mana to add to the bounty. Must be positive.
    pub amount: f64,
}

impl AddBountyRequest {
    pub fn validate(&self) -> Result<()> {
        check_positive_amount(self.amount)
    }
}

/// Body for `POST /market/{id}/award-bounty`.
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AwardBountyRequest {
    /// Bountied question to award from.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Amount of the bounty to award. Must be positive.
    pub amount: f64,
    /// Comment receiving the award.
    #[builder(into)]
    pub comment_id: String,
}

impl AwardBountyRequest {
    pub fn validate(&self) -> Result<()> {
        check_positive_amount(self.amount)
    }
}

/// Body for `POST /market/{id}/close`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloseMarketRequest {
    /// Market to close.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// When to close the market; immediately when absent. Must be in the
    /// future when present.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub close_time: Option<DateTime<Utc>>,
}

impl CloseMarketRequest {
    pub fn validate(&self) -> Result<()> {
        check_close_time(self.close_time)
    }
}

/// Body for `POST /market/{id}/group`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetGroupRequest {
    /// Market to add or remove.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Group to add the market to, or remove it from.
    #[builder(into)]
    pub group_id: String,
    /// Remove the market from the group instead of adding it.
    pub remove: Option<bool>,
}

/// One answer's share of a free-response resolution.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
#[non_exhaustive]
pub struct Resolution {
    /// Index of the answer being resolved.
    pub answer: i64,
    /// Percentage of the payout allocated to the answer.
    pub pct: i64,
}

/// Body for `POST /market/{id}/resolve` on a binary market.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResolveBinaryRequest {
    /// Market to resolve.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// `YES`, `NO`, `MKT`, or `CANCEL`.
    #[builder(into)]
    pub outcome: String,
    /// Resolution probability in percent, between 0 and 100, when the
    /// outcome is `MKT`.
    pub probability_int: Option<i64>,
}

impl ResolveBinaryRequest {
    pub fn validate(&self) -> Result<()> {
        check_one_of("outcome", &self.outcome, &["YES", "NO", "MKT", "CANCEL"])?;

        if self.outcome == "MKT" {
            if let Some(probability_int) = self.probability_int {
                check_in_range("probabilityInt", probability_int, 0, 100)?;
            }
        }

        Ok(())
    }
}

/// Body for `POST /market/{id}/resolve` on a free-response or
/// multiple-choice market.
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResolveFreeResponseRequest {
    /// Market to resolve.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// `MKT` or `CANCEL`.
    #[builder(into)]
    pub outcome: String,
    /// Per-answer payout percentages; required for `MKT` and must sum to
    /// exactly 100.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub resolutions: Vec<Resolution>,
}

impl ResolveFreeResponseRequest {
    pub fn validate(&self) -> Result<()> {
        check_one_of("outcome", &self.outcome, &["MKT", "CANCEL"])?;

        if self.outcome == "MKT" {
            if self.resolutions.is_empty() {
                return Err(Error::validation(
                    "resolutions: required when resolving to MKT",
                ));
            }

            let total: i64 = self.resolutions.iter().map(|r| r.pct).sum();
            if total != 100 {
                return Err(Error::validation(format!(
                    "resolutions: percentages sum to {total}, must sum to exactly 100"
                )));
            }
        }

        Ok(())
    }
}

/// Body for `POST /market/{id}/resolve` on a numeric market.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResolveNumericRequest {
    /// Market to resolve.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// Only `CANCEL` is supported.
    #[builder(into)]
    pub outcome: String,
    /// Final value of the market.
    pub value: Option<f64>,
    /// Resolution probability in percent, between 0 and 100.
    pub probability_int: Option<i64>,
}

impl ResolveNumericRequest {
    pub fn validate(&self) -> Result<()> {
        check_one_of("outcome", &self.outcome, &["CANCEL"])?;

        if let Some(probability_int) = self.probability_int {
            check_in_range("probabilityInt", probability_int, 0, 100)?;
        }

        Ok(())
    }
}

/// Body for `POST /market/{id}/sell`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SellSharesRequest {
    /// Market to sell shares in.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub contract_id: String,
    /// `YES` or `NO`; defaults to the held outcome server-side.
    #[builder(into)]
    pub outcome: Option<String>,
    /// Number of shares to sell; all held shares when absent. Must be
    /// positive when present.
    pub shares: Option<f64>,
    /// Answer to sell shares in, for multiple-choice markets.
    #[builder(into)]
    pub answer_id: Option<String>,
}

impl SellSharesRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(outcome) = &self.outcome {
            check_one_of("outcome", outcome, &["YES", "NO"])?;
        }

        if let Some(shares) = self.shares {
            if shares <= 0.0 {
                return Err(Error::validation(format!(
                    "shares: invalid value {shares}, must be greater than 0"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::error::{Kind, NotAllowed, OutOfRange};

    #[test]
    fn markets_sort_is_enumerated() {
        let request = MarketsRequest::builder().sort("created-time").build();
        assert!(request.validate().is_ok());

        let request = MarketsRequest::builder().sort("alphabetical").build();
        let err = request.validate().unwrap_err();
        assert!(err.downcast_ref::<NotAllowed>().is_some());
    }

    #[test]
    fn search_accepts_every_documented_sort() {
        for sort in ALLOWED_SEARCH_SORT {
            let request = SearchRequest::builder().term("ai").sort(*sort).build();
            assert!(request.validate().is_ok(), "sort {sort} should be accepted");
        }
    }

    #[test]
    fn search_rejects_negative_offset() {
        let request = SearchRequest::builder().term("ai").offset(-5).build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn search_serializes_term_under_the_term_key() {
        let request = SearchRequest::builder().term("climate").build();
        let encoded = serde_html_form::to_string(&request).expect("encode");
        assert_eq!(encoded, "term=climate");
    }

    #[test]
    fn binary_initial_prob_bounds_are_inclusive() {
        let ok = CreateBinaryRequest::builder().question("q").initial_prob(1).build();
        assert!(ok.validate().is_ok());

        let ok = CreateBinaryRequest::builder().question("q").initial_prob(99).build();
        assert!(ok.validate().is_ok());

        let err = CreateBinaryRequest::builder()
            .question("q")
            .initial_prob(0)
            .build()
            .validate()
            .unwrap_err();
        assert!(err.downcast_ref::<OutOfRange>().is_some());

        let err = CreateBinaryRequest::builder()
            .question("q")
            .initial_prob(100)
            .build()
            .validate()
            .unwrap_err();
        assert!(err.downcast_ref::<OutOfRange>().is_some());
    }

    #[test]
    fn pseudo_numeric_initial_value_is_exclusive() {
        let request = |initial_value: i64| {
            CreatePseudoNumericRequest::builder()
                .question("q")
                .min(0)
                .max(10)
                .initial_value(initial_value)
                .is_log_scale(false)
                .build()
        };

        assert!(request(0).validate().is_err());
        assert!(request(10).validate().is_err());
        assert!(request(5).validate().is_ok());
    }

    #[test]
    fn close_time_must_be_in_the_future() {
        let request = CreateBinaryRequest::builder()
            .question("q")
            .initial_prob(50)
            .close_time(Utc::now() - Duration::hours(1))
            .build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);

        let request = CloseMarketRequest::builder()
            .contract_id("c1")
            .close_time(Utc::now() - Duration::minutes(5))
            .build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn poll_requires_two_answers() {
        let request = CreatePollRequest::builder()
            .question("q")
            .answers(vec!["only one".to_owned()])
            .build();
        assert!(request.validate().is_err());
    }

    #[test]
    fn bountied_question_requires_positive_bounty() {
        let request = CreateBountiedQuestionRequest::builder()
            .question("q")
            .total_bounty(0)
            .build();
        assert!(request.validate().is_err());
    }

    #[test]
    fn binary_resolution_probability_only_checked_for_mkt() {
        let request = ResolveBinaryRequest::builder()
            .contract_id("c1")
            .outcome("MKT")
            .probability_int(150)
            .build();
        assert!(request.validate().is_err());

        let request = ResolveBinaryRequest::builder()
            .contract_id("c1")
            .outcome("YES")
            .build();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn free_response_resolutions_must_sum_to_100() {
        let request = |pcts: &[i64]| {
            ResolveFreeResponseRequest::builder()
                .contract_id("c1")
                .outcome("MKT")
                .resolutions(
                    pcts.iter()
                        .enumerate()
                        .map(|(i, pct)| {
                            Resolution::builder().answer(i as i64).pct(*pct).build()
                        })
                        .collect(),
                )
                .build()
        };

        assert!(request(&[50, 49]).validate().is_err());
        assert!(request(&[50, 51]).validate().is_err());
        assert!(request(&[60, 40]).validate().is_ok());
    }

    #[test]
    fn free_response_mkt_requires_resolutions() {
        let request = ResolveFreeResponseRequest::builder()
            .contract_id("c1")
            .outcome("MKT")
            .build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);

        let cancel = ResolveFreeResponseRequest::builder()
            .contract_id("c1")
            .outcome("CANCEL")
            .build();
        assert!(cancel.validate().is_ok());
    }

    #[test]
    fn sell_shares_must_be_positive() {
        let request = SellSharesRequest::builder().contract_id("c1").shares(0.0).build();
        assert!(request.validate().is_err());

        let request = SellSharesRequest::builder()
            .contract_id("c1")
            .outcome("YES")
            .shares(12.5)
            .build();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn path_parameter_is_not_serialized() {
        let request = AwardBountyRequest::builder()
            .contract_id("c1")
            .amount(50.0)
            .comment_id("comment-1")
            .build();

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({"amount": 50.0, "commentId": "comment-1"})
        );
    }
}
