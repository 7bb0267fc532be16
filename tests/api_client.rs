//! Prediction client against a mock prediction service

mod common;

use axum::http::StatusCode;
use hr_analytics_dashboard::client::{ApiClient, ApiError};
use hr_analytics_dashboard::models::{
    AttritionModel, Department, Education, EmployeeRecord, Gender, JobRole, LeakyEmployeeRecord,
    Overtime, PredictionPayload,
};
use serde_json::json;
use std::time::{Duration, Instant};
use tokio_test::{assert_err, assert_ok};

use common::{closed_port_url, MockBackend};

fn scenario_record() -> EmployeeRecord {
    EmployeeRecord {
        age: 30,
        gender: Gender::Male,
        education: Education::Graduate,
        department: Department::It,
        job_role: JobRole::Manager,
        monthly_income: 5000,
        years_at_company: 3,
        promotions: 0,
        overtime: Overtime::No,
        performance_rating: 3,
    }
}

#[tokio::test]
async fn test_logistic_prediction() {
    let backend = MockBackend::start().await;
    backend.respond_json(
        "/assignment_1/predict_attrition",
        json!({"attrition_prediction": 1, "attrition_probability": 0.82, "stay_probability": 0.18}),
    );

    let client = ApiClient::new(&backend.base_url);
    let result =
        assert_ok!(client.predict_attrition(AttritionModel::Logistic, &scenario_record()).await);

    assert_eq!(result.attrition_prediction, 1);
    assert_eq!(result.attrition_probability, Some(0.82));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/assignment_1/predict_attrition");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let expected = serde_json::to_value(scenario_record()).unwrap();
    assert_eq!(requests[0].body.as_ref().unwrap(), &expected);
}

#[tokio::test]
async fn test_random_forest_endpoint() {
    let backend = MockBackend::start().await;
    backend.respond_json(
        "/assignment_1/predict_using_random_forest",
        json!({"attrition_prediction": 0, "attrition_probability": 0.2, "stay_probability": 0.8}),
    );

    let client = ApiClient::new(&backend.base_url);
    let result = assert_ok!(client.predict_attrition_random_forest(&scenario_record()).await);

    assert!(!result.will_leave());
    assert_eq!(backend.requests()[0].path, "/assignment_1/predict_using_random_forest");
}

#[tokio::test]
async fn test_http_error_carries_status() {
    let backend = MockBackend::start().await;
    backend.respond(
        "/assignment_1/predict_attrition",
        StatusCode::INTERNAL_SERVER_ERROR,
        "not json at all",
    );

    let client = ApiClient::new(&backend.base_url);
    let err = assert_err!(client.predict_attrition_logistic(&scenario_record()).await);

    assert_eq!(
        err,
        ApiError::Http { status: 500, status_text: "Internal Server Error".to_string() }
    );
    assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
}

#[tokio::test]
async fn test_validation_error_from_backend() {
    let backend = MockBackend::start().await;
    backend.respond(
        "/assignment_2/predict/fixed",
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":[]}"#,
    );

    let client = ApiClient::new(&backend.base_url);
    let err = assert_err!(client.predict_fixed_model(&scenario_record()).await);

    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let backend = MockBackend::start().await;
    backend.respond("/assignment_1/predict_attrition", StatusCode::OK, "<html>oops</html>");

    let client = ApiClient::new(&backend.base_url);
    let err = assert_err!(client.predict_attrition_logistic(&scenario_record()).await);

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_network_error() {
    let client = ApiClient::new(closed_port_url().await);
    let err = assert_err!(client.predict_attrition_logistic(&scenario_record()).await);

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_leakage_routing_by_payload() {
    let backend = MockBackend::start().await;
    backend.respond_json("/assignment_2/predict/broken", json!({"prediction": [1]}));
    backend.respond_json("/assignment_2/predict/fixed", json!({"prediction": [0]}));

    let client = ApiClient::new(&backend.base_url);

    let leaky = PredictionPayload::Leaky(LeakyEmployeeRecord {
        employee: scenario_record(),
        attrition_copy: 1,
        target_leakage_feature: 1,
    });
    let broken = assert_ok!(client.predict_leakage(&leaky).await);
    assert_eq!(broken.label(), Some(1));

    let plain = PredictionPayload::Plain(scenario_record());
    let fixed = assert_ok!(client.predict_leakage(&plain).await);
    assert_eq!(fixed.label(), Some(0));

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/assignment_2/predict/broken");
    assert_eq!(requests[0].body.as_ref().unwrap()["attrition_copy"], 1);
    assert_eq!(requests[0].body.as_ref().unwrap()["target_leakage_feature"], 1);

    assert_eq!(requests[1].path, "/assignment_2/predict/fixed");
    let fixed_body = requests[1].body.as_ref().unwrap().as_object().unwrap();
    assert!(!fixed_body.contains_key("attrition_copy"));
    assert!(!fixed_body.contains_key("target_leakage_feature"));
}

#[tokio::test]
async fn test_empty_prediction_rejected() {
    let backend = MockBackend::start().await;
    backend.respond_json("/assignment_2/predict/fixed", json!({"prediction": []}));

    let client = ApiClient::new(&backend.base_url);
    let err = assert_err!(client.predict_fixed_model(&scenario_record()).await);

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_backend_status() {
    let backend = MockBackend::start().await;
    backend.respond_json(
        "/",
        json!({
            "message": "Main API is running",
            "endpoints": ["/assignment_1/", "/assignment_2/"]
        }),
    );

    let client = ApiClient::new(format!("{}/", backend.base_url));
    let status = assert_ok!(client.backend_status().await);

    assert_eq!(status.message, "Main API is running");
    assert_eq!(status.endpoints.len(), 2);
    assert_eq!(backend.requests()[0].method, "GET");
}

#[tokio::test]
async fn test_backend_status_gives_up_on_hung_backend() {
    let backend = MockBackend::start().await;
    backend.respond_json("/", json!({"message": "too late", "endpoints": []}));
    backend.delay("/", Duration::from_secs(5));

    let client = ApiClient::new(&backend.base_url).with_status_timeout(Duration::from_millis(200));
    let started = Instant::now();
    let err = assert_err!(client.backend_status().await);

    assert!(matches!(err, ApiError::Network(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_prediction_not_bounded_by_status_timeout() {
    let backend = MockBackend::start().await;
    backend.respond_json("/assignment_2/predict/fixed", json!({"prediction": [0]}));
    backend.delay("/assignment_2/predict/fixed", Duration::from_millis(500));

    let client = ApiClient::new(&backend.base_url).with_status_timeout(Duration::from_millis(100));
    let result = assert_ok!(client.predict_fixed_model(&scenario_record()).await);

    assert_eq!(result.label(), Some(0));
}
