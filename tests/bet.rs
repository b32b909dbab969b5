#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the bet endpoints.

use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use manifold_client_sdk::Client;
use manifold_client_sdk::bet::types::request::{BetsRequest, PlaceBetRequest};
use manifold_client_sdk::error::Kind;
use reqwest::StatusCode;
use serde_json::json;

fn canned_bet(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "user-1",
        "contractId": "market-1",
        "createdTime": 1_650_000_000_000_i64,
        "amount": 10.0,
        "outcome": "YES",
        "shares": 16.1,
        "probBefore": 0.60,
        "probAfter": 0.62,
        "fees": {"creatorFee": 0.0, "platformFee": 0.0, "liquidityFee": 0.0},
        "isRedemption": false
    })
}

#[tokio::test]
async fn list_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/bets")
            .query_param("contractId", "market-1")
            .query_param("limit", "10")
            .query_param("order", "desc");
        then.status(StatusCode::OK)
            .json_body(json!([canned_bet("bet-1"), canned_bet("bet-2")]));
    });

    let request = BetsRequest::builder()
        .contract_id("market-1")
        .limit(10)
        .order("desc")
        .build();
    let bets = client.bet().list(&request).await?;

    assert_eq!(bets.len(), 2);
    assert_eq!(bets[0].outcome, "YES");
    assert!(bets[0].limit_props.is_none());
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn list_rejects_out_of_range_limit() -> anyhow::Result<()> {
    let client = Client::new("http://localhost:1/")?;

    let request = BetsRequest::builder().limit(1001).build();
    let err = client.bet().list(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);

    Ok(())
}

#[tokio::test]
async fn place_should_send_auth_and_body() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::with_api_key(&server.base_url(), "test-key".into())?;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/bet")
            .header("authorization", "Key test-key")
            .header("content-type", "application/json")
            .json_body(json!({
                "amount": 10.0,
                "contractId": "market-1",
                "outcome": "YES"
            }));
        then.status(StatusCode::OK).json_body(canned_bet("bet-1"));
    });

    let request = PlaceBetRequest::builder()
        .amount(10.0)
        .contract_id("market-1")
        .outcome("YES")
        .build();
    let bet = client.bet().place(&request).await?;

    assert_eq!(bet.id, "bet-1");
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn place_limit_order_decodes_fills() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mut body = canned_bet("bet-1");
    body["limitProps"] = json!({
        "orderAmount": 100.0,
        "limitProb": 0.65,
        "isFilled": false,
        "isCancelled": false,
        "fills": [{
            "matchedBetId": null,
            "amount": 10.0,
            "shares": 16.1,
            "timestamp": 1_650_000_000_500_i64,
            "fees": {"creatorFee": 0.0, "platformFee": 0.0, "liquidityFee": 0.0}
        }]
    });

    let mock = server.mock(|when, then| {
        when.method(POST).path("/bet");
        then.status(StatusCode::OK).json_body(body);
    });

    let request = PlaceBetRequest::builder()
        .amount(100.0)
        .contract_id("market-1")
        .outcome("YES")
        .limit_prob(0.65)
        .build();
    let bet = client.bet().place(&request).await?;

    let limit_props = bet.limit_props.unwrap();
    assert_eq!(limit_props.fills.len(), 1);
    assert_eq!(limit_props.fills[0].matched_bet_id, None);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn place_rejects_invalid_bet_without_a_request() -> anyhow::Result<()> {
    let client = Client::new("http://localhost:1/")?;

    let request = PlaceBetRequest::builder()
        .amount(-5.0)
        .contract_id("market-1")
        .build();
    let err = client.bet().place(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);

    Ok(())
}

#[tokio::test]
async fn cancel_should_post_to_the_bet_path() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/bet/cancel/bet-1");
        then.status(StatusCode::OK).json_body(canned_bet("bet-1"));
    });

    client.bet().cancel("bet-1").await?;

    mock.assert();

    Ok(())
}
