use super::types::request::{ManagramsRequest, SendManagramRequest};
use super::types::response::Txn;
use crate::Result;
use crate::transport::{Transport, decode};

/// Client for the mana transfer endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of managram transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn managrams(&self, request: &ManagramsRequest) -> Result<Vec<Txn>> {
        request.validate()?;
        let body = self.transport.get("managrams", request).await?;
        decode("managrams", &body)
    }

    /// Sends mana to one or more users.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the request cannot be executed.
    pub async fn send(&self, request: &SendManagramRequest) -> Result<()> {
        request.validate()?;
        self.transport.post("managram", Some(request)).await?;

        Ok(())
    }
}
