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
use crate::validate::check_in_range;

/// Filters for `GET /managrams`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ManagramsRequest {
    /// Only return managrams sent to this user ID.
    #[builder(into)]
    pub to_id: Option<String>,
    /// Only return managrams sent by this user ID.
    #[builder(into)]
    pub from_id: Option<String>,
    /// Maximum number of managrams to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Only return managrams created before this time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub before: Option<DateTime<Utc>>,
    /// Only return managrams created after this time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub after: Option<DateTime<Utc>>,
}

impl ManagramsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            check_in_range("limit", limit, 0, 1000)?;
        }

        Ok(())
    }
}

/// Body for `POST /managram`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SendManagramRequest {
    /// User IDs to send mana to. Must not be empty.
    pub to_ids: Vec<String>,
    /// Amount of mana each recipient receives. Must be positive.
    pub amount: f64,
    /// Message attached to the transfer.
    #[builder(into)]
    pub message: Option<String>,
}

impl SendManagramRequest {
    pub fn validate(&self) -> Result<()> {
        if self.to_ids.is_empty() {
            return Err(Error::validation("toIds: at least one recipient is required"));
        }

        if self.amount <= 0.0 {
            return Err(Error::validation(format!(
                "amount: invalid value {}, must be greater than 0",
                self.amount
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn managram_requires_recipients_and_positive_amount() {
        let request = SendManagramRequest::builder().to_ids(vec![]).amount(10.0).build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);

        let request = SendManagramRequest::builder()
            .to_ids(vec!["user-1".to_owned()])
            .amount(-5.0)
            .build();
        assert_eq!(request.validate().unwrap_err().kind(), Kind::Validation);

        let request = SendManagramRequest::builder()
            .to_ids(vec!["user-1".to_owned()])
            .amount(25.0)
            .message("thanks")
            .build();
        assert!(request.validate().is_ok());
    }
}
