// Integration tests for `StoreClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use larder_store::{DocumentStore, Error, StoreClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, StoreClient) {
    let server = MockServer::start().await;
    let client = StoreClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("client should build from mock server uri");
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_query_collection() {
    let (server, client) = setup().await;

    let body = json!({
        "documents": [
            { "key": "apple", "fields": { "quantity": 1 } },
            { "key": "banana", "fields": { "quantity": 3 } },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let docs = client.query_collection("inventory").await.expect("query");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].key, "apple");
    assert_eq!(docs[0].fields.get("quantity"), Some(&json!(1)));
    assert_eq!(docs[1].key, "banana");
}

#[tokio::test]
async fn test_query_empty_collection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .mount(&server)
        .await;

    let docs = client.query_collection("inventory").await.expect("query");
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_get_document() {
    let (server, client) = setup().await;

    let body = json!({ "key": "apple", "fields": { "quantity": 4 } });

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents/apple"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let fields = client
        .get_document("inventory", "apple")
        .await
        .expect("get")
        .expect("document should exist");
    assert_eq!(fields.get("quantity"), Some(&json!(4)));
}

#[tokio::test]
async fn test_get_absent_document_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents/ghost"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "no such document", "code": "not_found" })),
        )
        .mount(&server)
        .await;

    let fields = client.get_document("inventory", "ghost").await.expect("get");
    assert!(fields.is_none());
}

#[tokio::test]
async fn test_set_document_sends_full_replace_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/collections/inventory/documents/apple"))
        .and(body_json(json!({ "fields": { "quantity": 2 } })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut fields = larder_store::Fields::new();
    fields.insert("quantity".into(), json!(2));
    client
        .set_document("inventory", "apple", fields)
        .await
        .expect("set");
}

#[tokio::test]
async fn test_delete_document() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/collections/inventory/documents/apple"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_document("inventory", "apple").await.expect("delete");
}

#[tokio::test]
async fn test_delete_absent_document_is_ok() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/collections/inventory/documents/ghost"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "no such document", "code": "not_found" })),
        )
        .mount(&server)
        .await;

    // Idempotent delete: 404 from the store is a success.
    client.delete_document("inventory", "ghost").await.expect("delete");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_envelope_parsed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "backend unavailable",
            "code": "internal",
        })))
        .mount(&server)
        .await;

    let err = client.query_collection("inventory").await.expect_err("should fail");
    match err {
        Error::Api {
            message,
            code,
            status,
        } => {
            assert_eq!(message, "backend unavailable");
            assert_eq!(code.as_deref(), Some("internal"));
            assert_eq!(status, 500);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "invalid API key", "code": "unauthorized" })),
        )
        .mount(&server)
        .await;

    let err = client.query_collection("inventory").await.expect_err("should fail");
    assert!(matches!(err, Error::Authentication { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.query_collection("inventory").await.expect_err("should fail");
    assert!(matches!(err, Error::Deserialization { .. }), "got {err:?}");
}

#[test]
fn test_cannot_be_a_base_url_is_rejected_at_construction() {
    for bad in ["data:text/plain,inventory", "mailto:ops@example.com"] {
        let err = StoreClient::from_reqwest(bad, reqwest::Client::new())
            .expect_err("URL without a path should be rejected");
        assert!(matches!(err, Error::InvalidUrl(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn test_key_with_spaces_is_percent_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/inventory/documents/olive%20oil"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "olive oil",
            "fields": { "quantity": 1 },
        })))
        .mount(&server)
        .await;

    let fields = client
        .get_document("inventory", "olive oil")
        .await
        .expect("get")
        .expect("document should exist");
    assert_eq!(fields.get("quantity"), Some(&json!(1)));
}
