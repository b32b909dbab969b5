#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Tests for the shared HTTP behavior: authentication, the raw escape
//! hatches, and how non-2xx and network failures surface.

use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use manifold_client_sdk::Client;
use manifold_client_sdk::error::Kind;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn anonymous_client_sends_no_auth_header() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/me").header_missing("authorization");
        then.status(StatusCode::UNAUTHORIZED)
            .json_body(json!({"message": "Missing auth"}));
    });

    let body = client.get_raw("me", &()).await?;

    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(payload["message"], json!("Missing auth"));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn get_raw_returns_error_payloads_as_bytes() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/nope");
        then.status(StatusCode::NOT_FOUND)
            .json_body(json!({"message": "Market not found"}));
    });

    let body = client.get_raw("market/nope", &()).await?;

    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(payload["message"], json!("Market not found"));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn typed_decode_of_an_error_payload_is_a_decode_error() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/market/nope");
        then.status(StatusCode::NOT_FOUND)
            .json_body(json!({"message": "Market not found"}));
    });

    let err = client.market().by_id("nope").await.unwrap_err();

    assert_eq!(err.kind(), Kind::Decode);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn post_raw_without_a_body() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/unsubscribe");
        then.status(StatusCode::OK).json_body(json!({"success": true}));
    });

    let body = client.post_raw::<()>("unsubscribe", None).await?;

    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(payload["success"], json!(true));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() -> anyhow::Result<()> {
    let client = Client::new("http://127.0.0.1:1/")?;

    let err = client.get_raw("me", &()).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Transport);

    Ok(())
}

#[tokio::test]
async fn host_reports_the_configured_base_url() -> anyhow::Result<()> {
    let client = Client::default();

    assert_eq!(client.host().as_str(), "https://api.manifold.markets/v0/");

    Ok(())
}
