//! Prediction API Client
//!
//! HTTP client for the external prediction service. Every prediction is a
//! single JSON POST with no retries and no timeout. Only the informational
//! status check is bounded.

use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::models::{
    AttritionModel, AttritionResult, BackendStatus, EmployeeRecord, LeakageResult,
    LeakyEmployeeRecord, PredictionPayload,
};

/// Prediction service endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PredictAttritionLogistic,
    PredictAttritionRandomForest,
    PredictBroken,
    PredictFixed,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PredictAttritionLogistic => "/assignment_1/predict_attrition",
            Endpoint::PredictAttritionRandomForest => "/assignment_1/predict_using_random_forest",
            Endpoint::PredictBroken => "/assignment_2/predict/broken",
            Endpoint::PredictFixed => "/assignment_2/predict/fixed",
        }
    }

    pub fn for_model(model: AttritionModel) -> Self {
        match model {
            AttritionModel::Logistic => Endpoint::PredictAttritionLogistic,
            AttritionModel::RandomForest => Endpoint::PredictAttritionRandomForest,
        }
    }
}

/// Prediction client errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; the body is not read
    #[error("API Error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Upper bound for the overview page's status check
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Prediction API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    status_timeout: Duration,
}

impl ApiClient {
    /// Create a client for the given base URL (already validated by config)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Predict employee attrition using Logistic Regression model
    pub async fn predict_attrition_logistic(
        &self,
        payload: &EmployeeRecord,
    ) -> Result<AttritionResult, ApiError> {
        self.post_json(Endpoint::PredictAttritionLogistic, payload).await
    }

    /// Predict employee attrition using Random Forest model
    pub async fn predict_attrition_random_forest(
        &self,
        payload: &EmployeeRecord,
    ) -> Result<AttritionResult, ApiError> {
        self.post_json(Endpoint::PredictAttritionRandomForest, payload).await
    }

    /// Predict using broken model (with data leakage)
    pub async fn predict_broken_model(
        &self,
        payload: &LeakyEmployeeRecord,
    ) -> Result<LeakageResult, ApiError> {
        let result: LeakageResult = self.post_json(Endpoint::PredictBroken, payload).await?;
        ensure_prediction(result)
    }

    /// Predict using fixed model (without data leakage)
    pub async fn predict_fixed_model(
        &self,
        payload: &EmployeeRecord,
    ) -> Result<LeakageResult, ApiError> {
        let result: LeakageResult = self.post_json(Endpoint::PredictFixed, payload).await?;
        ensure_prediction(result)
    }

    pub async fn predict_attrition(
        &self,
        model: AttritionModel,
        payload: &EmployeeRecord,
    ) -> Result<AttritionResult, ApiError> {
        match model {
            AttritionModel::Logistic => self.predict_attrition_logistic(payload).await,
            AttritionModel::RandomForest => self.predict_attrition_random_forest(payload).await,
        }
    }

    /// Leaky payloads go to the broken model, plain ones to the fixed model
    pub async fn predict_leakage(
        &self,
        payload: &PredictionPayload,
    ) -> Result<LeakageResult, ApiError> {
        match payload {
            PredictionPayload::Leaky(record) => self.predict_broken_model(record).await,
            PredictionPayload::Plain(record) => self.predict_fixed_model(record).await,
        }
    }

    /// Fetch the backend's root banner, giving up after the status timeout
    pub async fn backend_status(&self) -> Result<BackendStatus, ApiError> {
        let url = format!("{}/", self.base_url);

        let response = self.http_client
            .get(&url)
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(response).await
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        tracing::debug!("POST {}", url);

        // `json` sets Content-Type: application/json
        let response = self.http_client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Prediction request to {} failed: {}", url, e);
                ApiError::Network(e.to_string())
            })?;

        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        tracing::warn!("Prediction service answered {} for {}", status, response.url());
        return Err(ApiError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Malformed prediction response: {}", e);
        ApiError::Parse(e.to_string())
    })
}

fn ensure_prediction(result: LeakageResult) -> Result<LeakageResult, ApiError> {
    if result.prediction.is_empty() {
        return Err(ApiError::Parse("response contains no prediction".to_string()));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new("http://localhost:8000/");

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(Endpoint::PredictAttritionLogistic),
            "http://localhost:8000/assignment_1/predict_attrition"
        );
        assert_eq!(
            client.url(Endpoint::PredictAttritionRandomForest),
            "http://localhost:8000/assignment_1/predict_using_random_forest"
        );
        assert_eq!(
            client.url(Endpoint::PredictBroken),
            "http://localhost:8000/assignment_2/predict/broken"
        );
        assert_eq!(
            client.url(Endpoint::PredictFixed),
            "http://localhost:8000/assignment_2/predict/fixed"
        );
    }

    #[test]
    fn test_endpoint_for_model() {
        assert_eq!(
            Endpoint::for_model(AttritionModel::Logistic),
            Endpoint::PredictAttritionLogistic
        );
        assert_eq!(
            Endpoint::for_model(AttritionModel::RandomForest),
            Endpoint::PredictAttritionRandomForest
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http { status: 500, status_text: "Internal Server Error".to_string() };
        assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
        assert_eq!(err.status(), Some(500));

        assert_eq!(ApiError::Parse("eof".into()).status(), None);
    }

    #[test]
    fn test_empty_prediction_rejected() {
        let err = ensure_prediction(LeakageResult { prediction: vec![] }).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));

        assert!(ensure_prediction(LeakageResult { prediction: vec![0] }).is_ok());
    }
}
