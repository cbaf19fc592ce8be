use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt;

async fn get(path: &str) -> (StatusCode, Value) {
    let app = tyche::create_app();
    let request = Request::builder()
        .uri(path)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, body_json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_generate_integer() {
    let (status, body) = get("/api/random?type=integer&min=10&max=20").await;
    assert_eq!(status, StatusCode::OK);
    let result = body["result"].as_i64().unwrap();
    assert!((10..=20).contains(&result));
}

#[tokio::test]
async fn test_generate_integer_default_range() {
    let (status, body) = get("/api/random?type=integer").await;
    assert_eq!(status, StatusCode::OK);
    let result = body["result"].as_i64().unwrap();
    assert!((0..=100).contains(&result));
}

#[tokio::test]
async fn test_generate_integer_empty_min_coerces_to_zero() {
    let (status, body) = get("/api/random?type=integer&min=&max=20").await;
    assert_eq!(status, StatusCode::OK);
    let result = body["result"].as_i64().unwrap();
    assert!((0..=20).contains(&result));
}

#[tokio::test]
async fn test_generate_string_empty_len_is_empty_string() {
    let (status, body) = get("/api/random?type=string&len=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "");
}

#[tokio::test]
async fn test_generate_guid() {
    let (status, body) = get("/api/random?type=guid").await;
    assert_eq!(status, StatusCode::OK);
    let guid = body["result"].as_str().unwrap();
    assert_eq!(guid.len(), 36);
    assert_eq!(guid.as_bytes()[14], b'4');
}

#[tokio::test]
async fn test_generate_string() {
    let (status, body) = get("/api/random?type=string&len=15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_str().unwrap().len(), 15);
}

#[tokio::test]
async fn test_generate_string_from_topic() {
    let (status, body) = get("/api/random?topic=science").await;
    assert_eq!(status, StatusCode::OK);
    let word = body["result"].as_str().unwrap();
    let science = ["Physics", "Chemistry", "Biology", "Astronomy", "Genetics", "Quantum Mechanics"];
    assert!(science.contains(&word));
}

#[tokio::test]
async fn test_generate_string_from_unknown_topic() {
    let (status, body) = get("/api/random?topic=underwater-basket-weaving").await;
    assert_eq!(status, StatusCode::OK);
    let message = body["result"].as_str().unwrap();
    assert!(message.contains("No specific data for topic 'underwater-basket-weaving'"));
}

#[tokio::test]
async fn test_invalid_min_max_range() {
    let (status, body) = get("/api/random?type=integer&min=20&max=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Min value cannot be greater than Max value");
}

#[tokio::test]
async fn test_non_numeric_min_returns_issue_list() {
    let (status, body) = get("/api/random?type=integer&min=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let issues = body["error"].as_array().unwrap();
    assert_eq!(issues[0]["field"], "min");
}

#[tokio::test]
async fn test_negative_len_is_rejected() {
    let (status, body) = get("/api/random?type=string&len=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_array());
}

#[tokio::test]
async fn test_missing_type_is_rejected() {
    let (status, body) = get("/api/random").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("type parameter"));
}

#[tokio::test]
async fn test_random_user() {
    let (status, body) = get("/api/random/user").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body["firstName"].is_string());
    assert!(body["lastName"].is_string());
    assert!(body["age"].is_number());
    assert!(body["email"].is_string());

    let address = &body["address"];
    assert!(address["street"].is_string());
    assert!(address["houseNumber"].is_number());
    assert!(address["zipCode"].is_string());
    assert!(address["city"].is_string());
    assert!(address["country"].is_string());

    let age = body["age"].as_i64().unwrap();
    assert!((18..=80).contains(&age));
}

#[tokio::test]
async fn test_random_destination() {
    let (status, body) = get("/api/random/destination").await;
    assert_eq!(status, StatusCode::OK);
    let city = body["result"].as_str().unwrap();
    assert!(!city.is_empty());
}

#[tokio::test]
async fn test_utc_time() {
    let (status, body) = get("/api/time/utc").await;
    assert_eq!(status, StatusCode::OK);
    let timestamp = body["utc_time"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
