#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::Result;
use crate::error::Error;
use crate::validate::check_in_range;

/// Filters for `GET /comments`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommentsRequest {
    /// Only return comments on this market ID.
    #[builder(into)]
    pub contract_id: Option<String>,
    /// Only return comments on the market with this slug.
    #[builder(into)]
    pub contract_slug: Option<String>,
    /// Maximum number of comments to return, between 0 and 1000.
    pub limit: Option<i64>,
    /// Number of comments to skip. Must not be negative.
    pub offset: Option<i64>,
    /// Only return comments posted by this user ID.
    #[builder(into)]
    pub user_id: Option<String>,
}

impl CommentsRequest {
    pub fn validate(&self) -> Result<()> {
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

/// Body for `POST /comment`.
///
/// Exactly one content form must be set: TipTap JSON (`content`), `html`, or
/// `markdown`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PostCommentRequest {
    /// ID of the market to comment on.
    #[builder(into)]
    pub contract_id: String,
    /// TipTap-formatted comment content.
    pub content: Option<Value>,
    /// HTML comment content.
    #[builder(into)]
    pub html: Option<String>,
    /// Markdown comment content.
    #[builder(into)]
    pub markdown: Option<String>,
}

impl PostCommentRequest {
    pub fn validate(&self) -> Result<()> {
        let set = usize::from(self.content.is_some())
            + usize::from(self.html.is_some())
            + usize::from(self.markdown.is_some());

        if set != 1 {
            return Err(Error::validation(
                "exactly one of content, html, or markdown must be set",
            ));
        }

        Ok(())
    }
}
