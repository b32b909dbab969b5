use serde::Serialize;

use super::types::request::{
    AddBountyRequest, AddLiquidityRequest, AnswerRequest, AwardBountyRequest,
    CloseMarketRequest, CreateBinaryRequest, CreateBountiedQuestionRequest,
    CreatePollRequest, CreatePseudoNumericRequest, MarketsRequest, ResolveBinaryRequest,
    ResolveFreeResponseRequest, ResolveNumericRequest, SearchRequest, SellSharesRequest,
    SetGroupRequest,
};
use super::types::response::{ContractMetric, FullMarket, LiteMarket};
use crate::Result;
use crate::bet::types::response::Bet;
use crate::mana::types::response::Txn;
use crate::transport::{Transport, decode};

/// Wraps a create-market body with its outcome type discriminator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMarketBody<'req, T: Serialize> {
    outcome_type: &'static str,
    #[serde(flatten)]
    request: &'req T,
}

/// Client for the market endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of markets.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn list(&self, request: &MarketsRequest) -> Result<Vec<LiteMarket>> {
        request.validate()?;
        let body = self.transport.get("markets", request).await?;
        decode("markets", &body)
    }

    /// Retrieves a market by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_id(&self, id: &str) -> Result<FullMarket> {
        let path = format!("market/{id}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves a market by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_slug(&self, slug: &str) -> Result<FullMarket> {
        let path = format!("slug/{slug}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves the positions held in a market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn positions(&self, id: &str) -> Result<Vec<ContractMetric>> {
        let path = format!("market/{id}/positions");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Searches markets by term and filters.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<LiteMarket>> {
        request.validate()?;
        let body = self.transport.get("search-markets", request).await?;
        decode("search-markets", &body)
    }

    async fn create<T: Serialize>(
        &self,
        outcome_type: &'static str,
        request: &T,
    ) -> Result<LiteMarket> {
        let body = CreateMarketBody {
            outcome_type,
            request,
        };
        let response = self.transport.post("market", Some(&body)).await?;
        decode("market", &response)
    }

    /// Creates a binary (YES/NO) market.
    ///
    /// Requires an API key; creation costs mana.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn create_binary(&self, request: &CreateBinaryRequest) -> Result<LiteMarket> {
        request.validate()?;
        self.create("BINARY", request).await
    }

    /// Creates a pseudo-numeric market.
    ///
    /// Requires an API key; creation costs mana.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn create_pseudo_numeric(
        &self,
        request: &CreatePseudoNumericRequest,
    ) -> Result<LiteMarket> {
        request.validate()?;
        self.create("PSEUDO_NUMERIC", request).await
    }

    /// Creates a poll.
    ///
    /// Requires an API key; creation costs mana.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn create_poll(&self, request: &CreatePollRequest) -> Result<LiteMarket> {
        request.validate()?;
        self.create("POLL", request).await
    }

    /// Creates a bountied question.
    ///
    /// Requires an API key; the bounty is deducted on creation.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn create_bountied_question(
        &self,
        request: &CreateBountiedQuestionRequest,
    ) -> Result<LiteMarket> {
        request.validate()?;
        self.create("BOUNTIED_QUESTION", request).await
    }

    /// Submits a new answer to a multiple-choice market.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed.
    pub async fn answer(&self, request: &AnswerRequest) -> Result<()> {
        let path = format!("market/{}/answer", request.contract_id);
        self.transport.post(&path, Some(request)).await?;

        Ok(())
    }

    /// Adds liquidity to a market's pool.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn add_liquidity(&self, request: &AddLiquidityRequest) -> Result<Txn> {
        request.validate()?;
        let path = format!("market/{}/add-liquidity", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Adds mana to a bountied question's bounty.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn add_bounty(&self, request: &AddBountyRequest) -> Result<Txn> {
        request.validate()?;
        let path = format!("market/{}/add-bounty", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Awards part of a bounty to a comment.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn award_bounty(&self, request: &AwardBountyRequest) -> Result<Txn> {
        request.validate()?;
        let path = format!("market/{}/award-bounty", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Closes a market, immediately or at a future close time.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the request cannot be executed.
    pub async fn close(&self, request: &CloseMarketRequest) -> Result<()> {
        request.validate()?;
        let path = format!("market/{}/close", request.contract_id);
        self.transport.post(&path, Some(request)).await?;

        Ok(())
    }

    /// Adds a market to a group, or removes it.
    ///
    /// Requires an API key. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed.
    pub async fn set_group(&self, request: &SetGroupRequest) -> Result<()> {
        let path = format!("market/{}/group", request.contract_id);
        self.transport.post(&path, Some(request)).await?;

        Ok(())
    }

    /// Resolves a binary market.
    ///
    /// Requires an API key; only the creator or a moderator may resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn resolve_binary(&self, request: &ResolveBinaryRequest) -> Result<LiteMarket> {
        request.validate()?;
        let path = format!("market/{}/resolve", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Resolves a free-response or multiple-choice market.
    ///
    /// Requires an API key; only the creator or a moderator may resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn resolve_free_response(
        &self,
        request: &ResolveFreeResponseRequest,
    ) -> Result<LiteMarket> {
        request.validate()?;
        let path = format!("market/{}/resolve", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Resolves (cancels) a numeric market.
    ///
    /// Requires an API key; only the creator or a moderator may resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn resolve_numeric(&self, request: &ResolveNumericRequest) -> Result<LiteMarket> {
        request.validate()?;
        let path = format!("market/{}/resolve", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }

    /// Sells shares in a market.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn sell(&self, request: &SellSharesRequest) -> Result<Bet> {
        request.validate()?;
        let path = format!("market/{}/sell", request.contract_id);
        let body = self.transport.post(&path, Some(request)).await?;
        decode(&path, &body)
    }
}
