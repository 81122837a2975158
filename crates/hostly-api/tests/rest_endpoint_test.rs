#![allow(clippy::unwrap_used)]
// Integration tests for `RestEndpoint` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hostly_api::{EndpointPaths, HostelApi, ResourceApi, RestClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HostelApi) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = RestClient::with_client(reqwest::Client::new(), base_url);
    let api = HostelApi::new(&client, &EndpointPaths::default()).unwrap();
    (server, api)
}

// ── Verb / path mapping ─────────────────────────────────────────────

#[tokio::test]
async fn get_all_hits_collection_path() {
    let (server, api) = setup().await;

    let payload = json!([
        { "id": 1, "name": "Casa Andina", "imagen": "", "address": "Cusco", "phone": "", "users_id": 7 },
        { "id": 2, "name": "Hostal Sol", "imagen": "", "address": "Lima", "phone": "", "users_id": 7 }
    ]);

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let resp = api.hotels.get_all().await.unwrap();

    assert_eq!(resp.status, 200);
    assert!(resp.is_success());
    assert_eq!(resp.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn get_by_id_hits_item_path() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 42, "price": 80.0, "type_room": "doble", "hotels_id": 1 })),
        )
        .mount(&server)
        .await;

    let resp = api.rooms.get_by_id("42").await.unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["type_room"], "doble");
}

#[tokio::test]
async fn create_posts_record_body() {
    let (server, api) = setup().await;

    let sent = json!({ "start_date": "2024-03-01", "end_date": "2024-03-05", "users_id": 3, "rooms_id": 9 });
    let created = json!({ "id": 55, "start_date": "2024-03-01", "end_date": "2024-03-05", "users_id": 3, "rooms_id": 9 });

    Mock::given(method("POST"))
        .and(path("/reservations"))
        .and(body_json(&sent))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&server)
        .await;

    let resp = api.reservations.create(&sent).await.unwrap();

    assert_eq!(resp.status, 201);
    assert!(resp.is_success());
    assert_eq!(resp.body["id"], 55);
}

#[tokio::test]
async fn update_puts_to_item_path() {
    let (server, api) = setup().await;

    let record = json!({ "id": 5, "name": "Nina", "email": "nina@example.com", "password": "pw", "type_user": "client" });

    Mock::given(method("PUT"))
        .and(path("/users/5"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(200).set_body_json(&record))
        .mount(&server)
        .await;

    let resp = api.users.update("5", &record).await.unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["name"], "Nina");
}

#[tokio::test]
async fn delete_hits_item_path() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/subscriptions/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resp = api.subscriptions.delete("8").await.unwrap();

    assert!(resp.is_success());
}

// ── Error surfacing ─────────────────────────────────────────────────

#[tokio::test]
async fn http_error_status_travels_as_data() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let resp = api.hotels.get_all().await.unwrap();

    assert_eq!(resp.status, 500);
    assert_eq!(resp.reason, "Internal Server Error");
    assert!(!resp.is_success());
    assert!(resp.body.is_null());
}

#[tokio::test]
async fn not_found_keeps_json_body() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resp = api.rooms.get_by_id("999").await.unwrap();

    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
}

#[tokio::test]
async fn garbage_success_body_is_deserialization_error() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = api.hotels.get_all().await;

    assert!(
        matches!(result, Err(hostly_api::Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Unroutable port — nothing is listening.
    let base_url = Url::parse("http://127.0.0.1:1/").unwrap();
    let client = RestClient::with_client(reqwest::Client::new(), base_url);
    let api = HostelApi::new(&client, &EndpointPaths::default()).unwrap();

    let result = api.hotels.get_all().await;

    match result {
        Err(e) => assert!(e.is_transient(), "expected transient transport error, got: {e:?}"),
        Ok(resp) => panic!("expected transport error, got response: {resp:?}"),
    }
}

#[tokio::test]
async fn custom_endpoint_paths_are_respected() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = RestClient::with_client(reqwest::Client::new(), base_url);
    let paths = EndpointPaths {
        hotels: "api/v1/hotels".into(),
        ..EndpointPaths::default()
    };
    let api = HostelApi::new(&client, &paths).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let resp = api.hotels.get_all().await.unwrap();
    assert!(resp.is_success());
}
