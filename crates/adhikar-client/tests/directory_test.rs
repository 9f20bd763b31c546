//! Behavioral tests for the RemoteDirectory per-key cache.

use adhikar_client::{ApiClient, ApiConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::for_base_url(&mock_server.uri()).unwrap();
    ApiClient::new(config).unwrap()
}

#[tokio::test]
async fn pc_list_is_fetched_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/pcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 30, "name": "पटना साहिब"},
            {"id": 31, "name": "पाटलिपुत्र"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let directory = test_client(&mock_server).directory();
    let first = directory.list_constituencies().await.unwrap();
    let second = directory.list_constituencies().await.unwrap();
    assert_eq!(first, second);
    // Mock expectation of exactly one hit verifies the cache on drop.
}

#[tokio::test]
async fn ac_lists_are_cached_per_pc() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/acs"))
        .and(query_param("pc", "पटना साहिब"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 181, "name": "कुम्हरार"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reference/acs"))
        .and(query_param("pc", "पाटलिपुत्र"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 190, "name": "दानापुर"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let directory = test_client(&mock_server).directory();

    let patna = directory.list_assembly_constituencies("पटना साहिब").await.unwrap();
    let pataliputra = directory.list_assembly_constituencies("पाटलिपुत्र").await.unwrap();
    assert_eq!(patna[0].name, "कुम्हरार");
    assert_eq!(pataliputra[0].name, "दानापुर");

    // Repeat hits for both keys come from cache.
    directory.list_assembly_constituencies("पटना साहिब").await.unwrap();
    directory.list_assembly_constituencies("पाटलिपुत्र").await.unwrap();
}

#[tokio::test]
async fn failure_is_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/pcs"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reference/pcs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 30, "name": "पटना साहिब"}])),
        )
        .mount(&mock_server)
        .await;

    let directory = test_client(&mock_server).directory();

    // First call fails; the failure must surface as an error, not "".
    assert!(directory.list_constituencies().await.is_err());

    // Second call retries the backend and succeeds.
    let pcs = directory.list_constituencies().await.unwrap();
    assert_eq!(pcs.len(), 1);
}

#[tokio::test]
async fn invalidate_forces_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/panchayats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 1, "name": "सबलपुर"}])),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let directory = test_client(&mock_server).directory();
    directory.list_panchayats().await.unwrap();
    directory.invalidate();
    directory.list_panchayats().await.unwrap();
}
