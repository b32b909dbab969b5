#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod bet;
mod client;
pub mod comment;
pub mod error;
pub mod group;
pub mod mana;
pub mod market;
pub(crate) mod transport;
pub mod user;
pub(crate) mod validate;

use serde::Serialize;

pub use crate::client::Client;
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Default base URL for the Manifold API.
///
/// The trailing slash matters: endpoint paths are appended directly.
pub const DEFAULT_HOST: &str = "https://api.manifold.markets/v0/";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement
/// [`Serialize`]. It uses [`serde_html_form`] to serialize the struct fields
/// into a query string; fields holding `None` are skipped entirely, so an
/// absent parameter never appears on the wire.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise a string
    /// starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}
