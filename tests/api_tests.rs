//! Integration tests for stripe-rs against a mock HTTP server.
//!
//! Every test starts its own `wiremock` server and points a client at it, so
//! the real `reqwest` transport is exercised end to end without network
//! access or credentials.
//!
//! Run with: cargo test --test api_tests
//!
//! Set `RUST_LOG=stripe_rs=debug` to see request and pagination logs.

use std::sync::Once;
use std::time::Duration;

use futures_util::TryStreamExt;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{
    body_string, body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stripe_rs::models::{
    AccountParams, BitcoinTransactionListParams, CardDetails, CardOwner, CardParams, Dob,
    LegalEntityParams,
};
use stripe_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a client talking to the mock server
fn create_client(server: &MockServer) -> StripeClient {
    init_logging();
    StripeClient::new(
        ApiKey::new("sk_test_wire"),
        ClientConfig::default().with_base_url(server.uri()),
    )
    .expect("Failed to create client")
}

fn list_body(url: &str, ids: &[&str], has_more: bool) -> Value {
    let data: Vec<_> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "object": "list", "url": url, "has_more": has_more, "data": data })
}

fn error_body(error_type: &str, message: &str) -> Value {
    json!({ "error": { "type": error_type, "message": message } })
}

// ============================================================================
// REQUEST SHAPE
// ============================================================================

mod request_tests {
    use super::*;

    #[tokio::test]
    async fn test_post_sends_form_body_with_bearer_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts"))
            .and(header("authorization", "Bearer sk_test_wire"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "managed=true&country=CA\
                 &legal_entity%5Bdob%5D%5Bday%5D=1\
                 &legal_entity%5Bdob%5D%5Bmonth%5D=1\
                 &legal_entity%5Bdob%5D%5Byear%5D=1990",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "acct_1", "managed": true, "country": "CA" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let account = client
            .accounts()
            .create(&AccountParams {
                managed: Some(true),
                country: Some("CA".into()),
                legal_entity: Some(LegalEntityParams {
                    dob: Some(Dob::new(1, 1, 1990)),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(account.id, "acct_1");
        assert!(account.managed);
    }

    #[tokio::test]
    async fn test_update_omits_unset_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/acct_1"))
            .and(body_string("debit_negative_balances=false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "acct_1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let params = AccountParams {
            debit_negative_balances: Some(false),
            ..Default::default()
        };
        client.accounts().update("acct_1", &params).await.unwrap();
    }

    #[tokio::test]
    async fn test_id_with_separators_stays_one_segment() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/accounts/a%2Fb%3Fc%23d"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "a/b?c#d", "deleted": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let deleted = client.accounts().delete("a/b?c#d").await.unwrap();

        assert_eq!(deleted.id, "a/b?c#d");
        assert!(deleted.deleted);
    }

    #[tokio::test]
    async fn test_api_version_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("stripe-version", "2015-10-16"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "acct_me" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = StripeClient::new(
            ApiKey::new("sk_test_wire"),
            ClientConfig::default()
                .with_base_url(server.uri())
                .with_api_version("2015-10-16"),
        )
        .unwrap();

        assert_eq!(client.accounts().get().await.unwrap().id, "acct_me");
    }

    #[tokio::test]
    async fn test_card_source_is_nested_with_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers/cus_1/sources"))
            .and(body_string_contains("source%5Bobject%5D=card"))
            .and(body_string_contains("source%5Bnumber%5D=4242424242424242"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "card_1", "object": "card", "last4": "4242" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let card = client
            .cards()
            .create(
                &CardOwner::Customer("cus_1".into()),
                &CardParams {
                    details: CardDetails {
                        number: Some("4242424242424242".into()),
                        exp_month: Some("10".into()),
                        exp_year: Some("20".into()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(card.last4.as_deref(), Some("4242"));
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

mod pagination_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_walks_every_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("limit", "2"))
            .and(query_param_is_missing("starting_after"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_body("/v1/accounts", &["acct_1", "acct_2"], true)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("limit", "2"))
            .and(query_param("starting_after", "acct_2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_body("/v1/accounts", &["acct_3"], false)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let mut iter = client.accounts().list(&ListParams::new().limit(2));
        let mut ids = Vec::new();
        while iter.next().await {
            ids.push(iter.current().unwrap().id.clone());
        }

        assert_eq!(ids, vec!["acct_1", "acct_2", "acct_3"]);
        assert!(iter.err().is_none());
        assert!(!iter.meta().unwrap().has_more);
    }

    #[tokio::test]
    async fn test_single_page_mode_fetches_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bitcoin/receivers/btcrcv_1/transactions"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
                "/v1/bitcoin/receivers/btcrcv_1/transactions",
                &["btctxn_1", "btctxn_2"],
                true,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let mut params = BitcoinTransactionListParams::new("btcrcv_1");
        params.list = ListParams::new().limit(5).single();

        let transactions: Vec<_> = client
            .bitcoin_transactions()
            .list(&params)
            .into_stream()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_filters_reach_the_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipients"))
            .and(query_param("verified", "true"))
            .and(query_param("created[gt]", "1437578361"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(list_body("/v1/recipients", &[], false)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let params = stripe_rs::models::RecipientListParams {
            verified: Some(true),
            list: ListParams::new().filter("created", "gt", "1437578361"),
        };
        let mut iter = client.recipients().list(&params);

        assert!(!iter.next().await);
        assert!(iter.is_exhausted());
    }

    #[tokio::test]
    async fn test_failed_page_is_terminal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param_is_missing("starting_after"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_body("/v1/accounts", &["acct_1"], true)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("starting_after", "acct_1"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(error_body("api_error", "boom")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let mut iter = client.accounts().list(&ListParams::new());

        assert!(iter.next().await);
        assert!(!iter.next().await);
        assert!(!iter.next().await);

        let err = iter.err().unwrap();
        assert!(err.is_server_error());
        assert!(err.is_retryable());
        assert_eq!(err.api_error().unwrap().message, "boom");
    }
}

// ============================================================================
// ERRORS
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tokens/tok_missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(error_body(
                "invalid_request_error",
                "No such token: tok_missing",
            )))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.tokens().get("tok_missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_invalid_request_carries_param() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/acct_1/reject"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "type": "invalid_request_error",
                    "message": "Invalid reason",
                    "param": "reason"
                }
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client
            .accounts()
            .reject(
                "acct_1",
                &AccountRejectParams {
                    reason: "bored".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        let payload = err.api_error().unwrap();
        assert_eq!(payload.error_type.as_deref(), Some("invalid_request_error"));
        assert_eq!(payload.param.as_deref(), Some("reason"));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.accounts().get().await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "acct_me" }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = StripeClient::new(
            ApiKey::new("sk_test_wire"),
            ClientConfig::default()
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let err = client.accounts().get().await.unwrap_err();

        assert!(matches!(err, Error::Timeout));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        init_logging();
        let client = StripeClient::new(
            ApiKey::new("sk_test_wire"),
            ClientConfig::default().with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();

        let err = client.accounts().get().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.api_error().is_none());
    }
}
