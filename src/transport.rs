//! Shared HTTP core for the Manifold API.
//!
//! Every endpoint method funnels through [`Transport::get`] or
//! [`Transport::post`]. The transport injects the `Authorization: Key <token>`
//! header when a key is configured, encodes query strings and JSON bodies, and
//! returns the raw response body. HTTP status codes are deliberately not
//! interpreted here: the Manifold API returns error payloads the caller may
//! want to inspect, so a non-2xx response surfaces as bytes, not as an error.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::{Result, ToQueryParams as _};

/// Fixed client-wide timeout; no per-request override is exposed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub(crate) struct Transport {
    host: Url,
    api_key: Option<SecretString>,
    client: ReqwestClient,
}

impl Transport {
    pub(crate) fn new(host: &str, api_key: Option<SecretString>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("manifold-client-sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            host: Url::parse(host)?,
            api_key,
            client,
        })
    }

    pub(crate) fn host(&self) -> &Url {
        &self.host
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(
                header::AUTHORIZATION,
                format!("Key {}", key.expose_secret()),
            ),
            None => builder,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, req))
    )]
    pub(crate) async fn get<Req: Serialize>(&self, path: &str, req: &Req) -> Result<Bytes> {
        let query = req.query_params();
        let builder = self
            .client
            .request(Method::GET, format!("{}{path}{query}", self.host));

        self.execute(Method::GET, path, self.authorize(builder))
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, body))
    )]
    pub(crate) async fn post<Req: Serialize>(
        &self,
        path: &str,
        body: Option<&Req>,
    ) -> Result<Bytes> {
        let mut builder = self
            .client
            .request(Method::POST, format!("{}{path}", self.host))
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.execute(Method::POST, path, self.authorize(builder))
            .await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Bytes> {
        let request = builder
            .build()
            .map_err(|e| Error::transport(method.clone(), path, e))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::transport(method.clone(), path, e))?;

        #[cfg(feature = "tracing")]
        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                method = %method,
                path = %path,
                "API returned a non-success status"
            );
        }

        response
            .bytes()
            .await
            .map_err(|e| Error::transport(method, path, e))
    }
}

/// Decodes a response body into the target record, attaching the originating
/// path on failure.
pub(crate) fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(path, e))
}
