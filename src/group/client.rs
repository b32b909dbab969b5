use super::types::request::GroupsRequest;
use super::types::response::Group;
use crate::Result;
use crate::transport::{Transport, decode};

/// Client for the group endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn list(&self, request: &GroupsRequest) -> Result<Vec<Group>> {
        let body = self.transport.get("groups", request).await?;
        decode("groups", &body)
    }

    /// Retrieves a group by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_slug(&self, slug: &str) -> Result<Group> {
        let path = format!("group/{slug}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves a group by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_id(&self, id: &str) -> Result<Group> {
        let path = format!("group/by-id/{id}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }
}
