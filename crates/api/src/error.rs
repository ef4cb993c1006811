//! API Error Responses
//!
//! Client-facing failures with the JSON bodies the frontend matches on.
//! Upstream model and storage failures are logged in detail server-side
//! and surfaced as generic messages here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors returned to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation; `field` names the offending key.
    #[error("validation failed on {field}: {message}")]
    Validation { message: String, field: String },

    /// Growth-plan generation failed anywhere in the chain.
    #[error("failed to generate plan")]
    PlanGeneration,

    /// Idea generation failed anywhere in the chain.
    #[error("failed to generate ideas")]
    IdeaGeneration,

    /// Anything else; details stay in the logs.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Validation error for a missing required field.
    pub fn required(field: &str) -> Self {
        ApiError::Validation {
            message: "Required".to_string(),
            field: field.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, field } => (
                StatusCode::BAD_REQUEST,
                json!({ "message": message, "field": field }),
            ),
            ApiError::PlanGeneration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Failed to generate plan" }),
            ),
            ApiError::IdeaGeneration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Failed to generate ideas" }),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal server error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_400_with_field() {
        let response = ApiError::required("email").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Required");
        assert_eq!(body["field"], "email");
    }

    #[tokio::test]
    async fn test_plan_generation_error_body() {
        let response = ApiError::PlanGeneration.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to generate plan");
    }

    #[tokio::test]
    async fn test_idea_generation_error_body() {
        let response = ApiError::IdeaGeneration.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to generate ideas");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("field").is_none());
    }
}
