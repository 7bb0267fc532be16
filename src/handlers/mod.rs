//! HTTP handlers

pub mod health;
pub mod home;
pub mod attrition;
pub mod leakage;

use axum::http::Uri;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Posted form fields as borrowed `(name, value)` pairs
pub(crate) fn form_inputs(fields: &[(String, String)]) -> impl Iterator<Item = (&str, &str)> {
    fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
}
