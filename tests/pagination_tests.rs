use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use t3_client::client::HttpClient;
use t3_client::collection::{CollectionQuery, fetch_all};
use t3_client::config::{Config, Credentials, ExportConfig, RestApiConfig};
use t3_client::error::AppError;

fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            hostname: "mo.metrc.com".to_string(),
            username: "user@example.com".to_string(),
            password: "test_password".to_string(),
            otp: None,
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 5,
        },
        export: ExportConfig {
            output_dir: "output".to_string(),
            page_size: 100,
        },
    }
}

async fn mock_login(server: &mut ServerGuard) {
    server
        .mock("POST", "/v2/auth/credentials")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accessToken":"jwt-abc123"}"#)
        .create_async()
        .await;
}

fn page_body(first_id: u64, count: u64, total: u64, page: u32) -> String {
    let data: Vec<Value> = (first_id..first_id + count)
        .map(|id| json!({"id": id, "label": format!("PKG-{id:05}")}))
        .collect();
    json!({"data": data, "total": total, "page": page, "pageSize": 100}).to_string()
}

fn page_query(page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("licenseNumber".into(), "CUL000003".into()),
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("pageSize".into(), "100".into()),
    ])
}

#[tokio::test]
async fn three_pages_yield_all_records_in_server_order() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;

    // 237 records split 100/100/37; each page may be requested exactly once.
    let page1 = server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(0, 100, 237, 1))
        .expect(1)
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(2))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(100, 100, 237, 2))
        .expect(1)
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(3))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(200, 37, 237, 3))
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new_lazy(test_config(&server.url()));
    let query = CollectionQuery::new("CUL000003", 100);
    let records: Vec<Value> = fetch_all(&client, "/v2/packages/active", &query)
        .await
        .expect("fetch should succeed");

    assert_eq!(records.len(), 237);
    let ids: Vec<u64> = records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    let expected: Vec<u64> = (0..237).collect();
    assert_eq!(ids, expected);

    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
}

#[tokio::test]
async fn single_short_page_terminates_immediately() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;

    let page1 = server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(0, 37, 37, 1))
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new_lazy(test_config(&server.url()));
    let query = CollectionQuery::new("CUL000003", 100);
    let records: Vec<Value> = fetch_all(&client, "/v2/packages/active", &query)
        .await
        .expect("fetch should succeed");

    assert_eq!(records.len(), 37);
    page1.assert_async().await;
}

#[tokio::test]
async fn empty_collection_yields_no_records() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;

    server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[],"total":0,"page":1,"pageSize":100}"#)
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new_lazy(test_config(&server.url()));
    let query = CollectionQuery::new("CUL000003", 100);
    let records: Vec<Value> = fetch_all(&client, "/v2/packages/active", &query)
        .await
        .expect("fetch should succeed");

    assert!(records.is_empty());
}

#[tokio::test]
async fn mid_pagination_failure_aborts_the_fetch() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;

    server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(0, 100, 237, 1))
        .create_async()
        .await;
    server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(2))
        .with_status(500)
        .with_body("internal server error")
        .create_async()
        .await;
    // Page 3 must never be requested once page 2 has failed.
    let page3 = server
        .mock("GET", "/v2/packages/active")
        .match_query(page_query(3))
        .expect(0)
        .create_async()
        .await;

    let client = HttpClient::new_lazy(test_config(&server.url()));
    let query = CollectionQuery::new("CUL000003", 100);
    let result: Result<Vec<Value>, _> = fetch_all(&client, "/v2/packages/active", &query).await;

    match result {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Unexpected(500), got {other:?}"),
    }
    page3.assert_async().await;
}

#[tokio::test]
async fn zero_page_size_is_rejected_before_any_request() {
    let mut server = Server::new_async().await;
    let listing = server
        .mock("GET", "/v2/packages/active")
        .expect(0)
        .create_async()
        .await;

    let client = HttpClient::new_lazy(test_config(&server.url()));
    let query = CollectionQuery::new("CUL000003", 0);
    let result: Result<Vec<Value>, _> = fetch_all(&client, "/v2/packages/active", &query).await;

    match result {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("page size")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    listing.assert_async().await;
}
