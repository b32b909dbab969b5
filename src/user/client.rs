use super::types::request::UsersRequest;
use super::types::response::{DisplayUser, User};
use crate::Result;
use crate::transport::{Transport, decode};

/// Client for the user endpoints of the Manifold API.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Retrieves a list of users, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be executed,
    /// or the response cannot be decoded.
    pub async fn list(&self, request: &UsersRequest) -> Result<Vec<User>> {
        request.validate()?;
        let body = self.transport.get("users", request).await?;
        decode("users", &body)
    }

    /// Retrieves a user by their username.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_username(&self, username: &str) -> Result<User> {
        let path = format!("user/{username}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves the lite projection of a user by their username.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_username_lite(&self, username: &str) -> Result<DisplayUser> {
        let path = format!("user/{username}/lite");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_id(&self, id: &str) -> Result<User> {
        let path = format!("user/by-id/{id}");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves the lite projection of a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn by_id_lite(&self, id: &str) -> Result<DisplayUser> {
        let path = format!("user/by-id/{id}/lite");
        let body = self.transport.get(&path, &()).await?;
        decode(&path, &body)
    }

    /// Retrieves the authenticated user.
    ///
    /// Requires an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be executed or the response
    /// cannot be decoded.
    pub async fn me(&self) -> Result<User> {
        let body = self.transport.get("me", &()).await?;
        decode("me", &body)
    }
}
