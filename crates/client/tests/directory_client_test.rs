//! Contract tests for DirectoryClient and FinancialYearClient.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/api/sellers` | `sellers_*` |
//! | GET    | `/api/buyers` | `buyers_*` |
//! | GET    | `/api/products` | `products_*` |
//! | GET    | `/api/financial-years` | `financial_years_*` |

use brokerbook_client::{BrokerbookClient, ClientError};
use brokerbook_shared::config::ApiConfig;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer, token: Option<&str>) -> BrokerbookClient {
    let config = ApiConfig {
        base_url: mock_server.uri(),
        token: token.map(str::to_string),
        timeout_secs: 5,
    };
    BrokerbookClient::new(&config).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── GET /api/sellers ─────────────────────────────────────────────────

#[tokio::test]
async fn sellers_decodes_bare_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sellers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "s-1", "firmName": "Shree Traders", "city": "Rajkot", "brokerageRate": "5"},
            {"id": 42, "name": "Patel & Sons", "brokerageRate": 2.5}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sellers = test_client(&mock_server, None).directory().sellers().await.unwrap();
    assert_eq!(sellers.len(), 2);
    assert_eq!(sellers[0].id.as_str(), "s-1");
    assert_eq!(sellers[0].firm_name, "Shree Traders");
    assert_eq!(sellers[0].city.as_deref(), Some("Rajkot"));
    assert_eq!(sellers[0].brokerage_rate, Some(dec!(5)));
    assert_eq!(sellers[1].id.as_str(), "42");
    assert_eq!(sellers[1].city, None);
    assert_eq!(sellers[1].brokerage_rate, Some(dec!(2.5)));
}

#[tokio::test]
async fn sellers_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sellers"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sellers = test_client(&mock_server, Some("secret-token"))
        .directory()
        .sellers()
        .await
        .unwrap();
    assert!(sellers.is_empty());
}

#[tokio::test]
async fn sellers_rejects_entry_without_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sellers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "s-1", "city": "Rajkot"}
        ])))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server, None).directory().sellers().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidPayload { .. }), "got {err:?}");
}

#[tokio::test]
async fn sellers_accepts_document_and_plain_ids_together() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sellers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "a1", "id": "a1", "firmName": "Shree Traders"},
            {"_id": "b2", "firmName": "Patel & Sons"}
        ])))
        .mount(&mock_server)
        .await;

    let sellers = test_client(&mock_server, None).directory().sellers().await.unwrap();
    assert_eq!(sellers.len(), 2);
    assert_eq!(sellers[0].id.as_str(), "a1");
    assert_eq!(sellers[1].id.as_str(), "b2");
}

// ── GET /api/buyers ──────────────────────────────────────────────────

#[tokio::test]
async fn buyers_decodes_wrapped_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/buyers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "b-1", "firmName": "Mehta Foods", "city": "Surat"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let buyers = test_client(&mock_server, None).directory().buyers().await.unwrap();
    assert_eq!(buyers.len(), 1);
    assert_eq!(buyers[0].firm_name, "Mehta Foods");
    assert_eq!(buyers[0].brokerage_rate, None);
}

#[tokio::test]
async fn buyers_handles_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/buyers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server, None).directory().buyers().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("database down"));
}

// ── GET /api/products ────────────────────────────────────────────────

#[tokio::test]
async fn products_rejects_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server, None).directory().products().await.unwrap_err();
    assert!(matches!(err, ClientError::Deserialization { .. }), "got {err:?}");
}

#[tokio::test]
async fn products_decodes_numeric_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 7, "name": "Cumin"}
        ])))
        .mount(&mock_server)
        .await;

    let products = test_client(&mock_server, None).directory().products().await.unwrap();
    assert_eq!(products[0].id.as_str(), "7");
    assert_eq!(products[0].firm_name, "Cumin");
}

// ── GET /api/financial-years ─────────────────────────────────────────

fn years_body() -> serde_json::Value {
    serde_json::json!([
        {"id": "fy-24", "name": "2024-25", "startDate": "2024-04-01", "endDate": "2025-03-31", "isActive": false},
        {"id": "fy-25", "yearName": "2025-26", "startDate": "2025-04-01T00:00:00.000Z", "endDate": "2026-03-31", "isActive": false}
    ])
}

#[tokio::test]
async fn financial_years_list_parses_dates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/financial-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(years_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let years = test_client(&mock_server, None).financial_years().list().await.unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[1].name, "2025-26");
    assert_eq!(years[1].start_date, day(2025, 4, 1));
    assert_eq!(years[1].end_date, day(2026, 3, 31));
}

#[tokio::test]
async fn financial_years_default_picks_year_containing_today() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/financial-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(years_body()))
        .mount(&mock_server)
        .await;

    let chosen = test_client(&mock_server, None)
        .financial_years()
        .default_year(day(2024, 12, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chosen.id.as_str(), "fy-24");
}

#[tokio::test]
async fn financial_years_default_is_none_when_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/financial-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let chosen = test_client(&mock_server, None)
        .financial_years()
        .default_year(day(2025, 6, 1))
        .await
        .unwrap();
    assert!(chosen.is_none());
}

#[tokio::test]
async fn financial_years_rejects_inverted_range() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/financial-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "fy-x", "name": "bad", "startDate": "2026-04-01", "endDate": "2025-03-31"}
        ])))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server, None).financial_years().list().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidPayload { .. }), "got {err:?}");
}

#[test]
fn client_rejects_unsupported_scheme() {
    let config = ApiConfig {
        base_url: "ftp://books.example.com".into(),
        token: None,
        timeout_secs: 5,
    };
    assert!(matches!(BrokerbookClient::new(&config), Err(ClientError::Config(_))));
}
