#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{TimestampMilliSeconds, serde_as, skip_serializing_none};

/// Filters for `GET /groups`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct GroupsRequest {
    /// Only return groups created before this time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(rename = "beforeTime")]
    pub before_time: Option<DateTime<Utc>>,
    /// Only return groups whose markets are visible to this user.
    // The API expects this exact casing, at odds with its other ID params.
    #[serde(rename = "availableToUserID")]
    #[builder(into)]
    pub available_to_user_id: Option<String>,
}
