// ABOUTME: HTTP-level tests for the analytics client against a wiremock server
// ABOUTME: Query parameters, payload decoding and the three failure classes

use keyscope_core::{ResultItem, ResultType};
use keyscope_tui::api::{AnalyticsApi, ApiError, HttpAnalyticsApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HttpAnalyticsApi {
    HttpAnalyticsApi::new(server.uri()).unwrap()
}

#[tokio::test]
async fn test_analyze_sends_keyword_and_decodes_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analyze"))
        .and(query_param("q", "캠핑 의자"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keyword": "캠핑 의자",
            "summary": {"pc": 1200, "mobile": 8800, "total_vol": 10000, "doc_count": 450, "ratio": 0.045},
            "sections": {"pc": ["shopping", "blog"], "mobile": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server).await.analyze("캠핑 의자").await.unwrap();
    assert_eq!(report.summary.total_volume, 10_000);
    assert_eq!(report.summary.doc_count, 450);
    assert_eq!(report.sections.pc, vec!["shopping", "blog"]);
}

#[tokio::test]
async fn test_error_payload_with_bad_request_status_is_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Keyword is required"})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.analyze("").await.unwrap_err();
    assert_eq!(err, ApiError::Application("Keyword is required".to_string()));
    assert!(err.is_application_error());
}

#[tokio::test]
async fn test_error_payload_with_ok_status_is_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/difficulty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "upstream timeout"})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.difficulty("캠핑").await.unwrap_err();
    assert!(err.is_application_error());
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/realtime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.realtime().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/related"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keywords": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.related("캠핑").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let api = HttpAnalyticsApi::new("http://127.0.0.1:1").unwrap();
    let err = api.realtime().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_search_passes_result_type_and_decodes_both_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "텐트"))
        .and(query_param("type", "shop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "원터치 텐트", "lprice": "129000", "mallName": "캠핑몰", "link": "https://shop/1"},
            {"title": "텐트 후기", "description": "설치 후기", "bloggername": "camper", "postdate": "20240101", "link": "https://blog/1"}
        ])))
        .mount(&server)
        .await;

    let items = client_for(&server)
        .await
        .search("텐트", ResultType::Shop)
        .await
        .unwrap();
    assert!(matches!(items[0], ResultItem::Commerce { price: 129_000, .. }));
    assert!(matches!(items[1], ResultItem::Document { .. }));
    assert_eq!(items[0].detail(), "129,000원");
}

#[tokio::test]
async fn test_shopping_trends_send_category_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trends/shopping"))
        .and(query_param("cid", "50000003"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"rank": 1, "keyword": "무선 이어폰", "volume": 54000, "docs": 1200, "ratio": 0.0222, "insight": "💎 블루오션"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let trends = client_for(&server).await.shopping_trends("50000003").await.unwrap();
    assert_eq!(trends[0].keyword, "무선 이어폰");
    assert_eq!(trends[0].volume, 54_000);
}

#[tokio::test]
async fn test_gold_discovery_defaults_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gold/discover"))
        .and(query_param("q", "인기아이템"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"keyword": "캠핑 의자"},
            {"rank": "-", "keyword": "캠핑 테이블", "pc_vol": 100, "mo_vol": 900, "docs": 80,
             "score": 12.5, "comp": "높음", "tier": "ultra", "label": "💎 종결", "trend": "🚀 급상승"}
        ])))
        .mount(&server)
        .await;

    let keywords = client_for(&server).await.discover_gold("인기아이템").await.unwrap();
    assert_eq!(keywords[0].score, 0.0);
    assert_eq!(keywords[0].rank_label(), "-");
    assert_eq!(keywords[0].tier_label(), "Ordinary");
    assert!(keywords[1].is_trending());
    assert_eq!(keywords[1].mobile_volume, 900);
}

#[tokio::test]
async fn test_health_reflects_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!client_for(&server).await.health().await.unwrap());
}
