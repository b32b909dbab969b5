use bytes::Bytes;
use secrecy::SecretString;
use serde::Serialize;
use url::Url;

use crate::transport::Transport;
use crate::{DEFAULT_HOST, Result, bet, comment, group, mana, market, user};

/// Top-level client for the Manifold API.
///
/// The client is stateless apart from its immutable configuration (host, API
/// key, fixed timeout) and is cheap to clone; clones share the underlying
/// connection pool. Endpoint methods are grouped into per-domain clients
/// reached through the accessor methods below.
///
/// # Authentication
///
/// Requests carry an `Authorization: Key <token>` header when an API key is
/// configured. Without a key the client operates in anonymous read-only mode;
/// write endpoints will be rejected by the server.
///
/// # Example
///
/// ```no_run
/// use manifold_client_sdk::Client;
/// use manifold_client_sdk::market::types::request::MarketsRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::default();
///
/// let request = MarketsRequest::builder().limit(10).build();
/// let markets = client.market().list(&request).await?;
/// for market in markets {
///     println!("{}: {}", market.id, market.question);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST).expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates an unauthenticated client against a custom host URL.
    ///
    /// The host must end with a trailing slash; endpoint paths are appended
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(host, None)?,
        })
    }

    /// Creates an authenticated client against a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn with_api_key(host: &str, api_key: SecretString) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(host, Some(api_key))?,
        })
    }

    /// Creates an authenticated client against the default Manifold endpoint.
    pub fn authenticated(api_key: SecretString) -> Self {
        Client::with_api_key(DEFAULT_HOST, api_key)
            .expect("Client with default endpoint should succeed")
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        self.transport.host()
    }

    /// Client for user endpoints.
    #[must_use]
    pub fn user(&self) -> user::Client {
        user::Client::new(self.transport.clone())
    }

    /// Client for group (topic) endpoints.
    #[must_use]
    pub fn group(&self) -> group::Client {
        group::Client::new(self.transport.clone())
    }

    /// Client for market endpoints.
    #[must_use]
    pub fn market(&self) -> market::Client {
        market::Client::new(self.transport.clone())
    }

    /// Client for bet endpoints.
    #[must_use]
    pub fn bet(&self) -> bet::Client {
        bet::Client::new(self.transport.clone())
    }

    /// Client for comment endpoints.
    #[must_use]
    pub fn comment(&self) -> comment::Client {
        comment::Client::new(self.transport.clone())
    }

    /// Client for mana transfer endpoints.
    #[must_use]
    pub fn mana(&self) -> mana::Client {
        mana::Client::new(self.transport.clone())
    }

    /// Performs a GET request against an arbitrary endpoint path and returns
    /// the raw response body.
    ///
    /// Escape hatch for endpoints the typed surface does not cover. Non-2xx
    /// responses are returned as bytes, never as errors.
    ///
    /// # Errors
    ///
    /// Returns an error only on network-level failure.
    pub async fn get_raw<Req: Serialize>(&self, path: &str, query: &Req) -> Result<Bytes> {
        self.transport.get(path, query).await
    }

    /// Performs a POST request with a JSON body against an arbitrary endpoint
    /// path and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error only on network-level failure.
    pub async fn post_raw<Req: Serialize>(&self, path: &str, body: Option<&Req>) -> Result<Bytes> {
        self.transport.post(path, body).await
    }
}
