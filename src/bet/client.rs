use super::types::request::{BetsRequest, PlaceBetRequest};
use super::types::response::Bet;
use crate::Result;
use crate::transport::{Transport, decode};

/// Client for the bet endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of bets.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn list(&self, request: &BetsRequest) -> Result<Vec<Bet>> {
        request.validate()?;
        let body = self.transport.get("bets", request).await?;
        decode("bets", &body)
    }

    /// Places a bet on a market.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn place(&self, request: &PlaceBetRequest) -> Result<Bet> {
        request.validate()?;
        let body = self.transport.post("bet", Some(request)).await?;
        decode("bet", &body)
    }

    /// Cancels an open limit order.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed.
    pub async fn cancel(&self, id: &str) -> Result<()> {
        let path = format!("bet/cancel/{id}");
        self.transport.post::<()>(&path, None).await?;

        Ok(())
    }
}
