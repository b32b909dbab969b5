use super::types::request::{CommentsRequest, PostCommentRequest};
use super::types::response::Comment;
use crate::Result;
use crate::transport::{Transport, decode};

/// Client for the comment endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of comments.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn list(&self, request: &CommentsRequest) -> Result<Vec<Comment>> {
        request.validate()?;
        let body = self.transport.get("comments", request).await?;
        decode("comments", &body)
    }

    /// Posts a comment on a market.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the request cannot be executed.
    pub async fn post(&self, request: &PostCommentRequest) -> Result<()> {
        request.validate()?;
        self.transport.post("comment", Some(request)).await?;

        Ok(())
    }
}
