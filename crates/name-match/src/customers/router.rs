use std::io::Cursor;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::batch::{BatchImporter, BatchMatch};
use super::domain::{Customer, ValidationOutcome};
use super::service::CustomerValidationService;
use crate::error::AppError;
use crate::matching::{match_emails, match_names};

#[derive(Debug, Deserialize)]
pub struct NameMatchRequest {
    #[serde(default)]
    pub name1: String,
    #[serde(default)]
    pub name2: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailMatchRequest {
    #[serde(default)]
    pub email1: String,
    #[serde(default)]
    pub email2: String,
}

/// Raw score; may be negative (one-sided empty name) or above `1.0`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreResponse {
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct ValidateCustomersRequest {
    #[serde(default)]
    pub name1: String,
    #[serde(default)]
    pub name2: String,
    #[serde(default)]
    pub email1: String,
    #[serde(default)]
    pub email2: String,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub csv: String,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub rows: usize,
    pub matched: usize,
    pub threshold: f64,
    pub matches: Vec<BatchMatch>,
}

/// Router builder exposing the name, email and customer matching endpoints.
pub fn matching_router(service: Arc<CustomerValidationService>) -> Router {
    Router::new()
        .route("/name-match", post(name_match_handler))
        .route("/email-match", post(email_match_handler))
        .route("/api/v1/customers/validate", post(validate_handler))
        .route("/api/v1/customers/batch", post(batch_handler))
        .with_state(service)
}

pub(crate) async fn name_match_handler(
    Json(request): Json<NameMatchRequest>,
) -> Json<ScoreResponse> {
    let score = match_names(&request.name1, &request.name2);
    Json(ScoreResponse { score })
}

pub(crate) async fn email_match_handler(
    Json(request): Json<EmailMatchRequest>,
) -> Json<ScoreResponse> {
    let score = match_emails(&request.email1, &request.email2);
    Json(ScoreResponse { score })
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<CustomerValidationService>>,
    Json(request): Json<ValidateCustomersRequest>,
) -> Result<Json<ValidationOutcome>, AppError> {
    let ValidateCustomersRequest {
        name1,
        name2,
        email1,
        email2,
        threshold,
    } = request;

    let lhs = Customer::new(name1, email1);
    let rhs = Customer::new(name2, email2);
    let threshold = threshold.unwrap_or(service.default_threshold());
    let outcome = service.validate(&lhs, &rhs, threshold)?;
    Ok(Json(outcome))
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<CustomerValidationService>>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let threshold = request.threshold.unwrap_or(service.default_threshold());
    let reader = Cursor::new(request.csv.into_bytes());
    let matches = BatchImporter::from_reader(reader, &service, threshold)?;
    let matched = matches.iter().filter(|entry| entry.outcome.matched).count();

    Ok(Json(BatchResponse {
        rows: matches.len(),
        matched,
        threshold,
        matches,
    }))
}
