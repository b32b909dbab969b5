#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::Result;
use crate::validate::check_in_range;

/// Filters for `GET /users`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UsersRequest {
    /// Maximum number of users to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Cursor: only return users created before this ID.
    #[builder(into)]
    pub before: Option<String>,
}

impl UsersRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            check_in_range("limit", limit, 0, 1000)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_bounds_are_inclusive() {
        assert!(UsersRequest::builder().limit(0).build().validate().is_ok());
        assert!(UsersRequest::builder().limit(1000).build().validate().is_ok());
        assert!(UsersRequest::builder().limit(1001).build().validate().is_err());
    }

    #[test]
    fn absent_fields_do_not_serialize() {
        let encoded = serde_html_form::to_string(UsersRequest::default()).expect("encode");
        assert_eq!(encoded, "");
    }
}
