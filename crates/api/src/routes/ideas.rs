//! Idea Lab Routes
//!
//! Same proxy pattern as the growth plan, but nothing is persisted; the
//! idea lab is a throwaway exploration surface.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::prompts;
use crate::routes::require_field;
use crate::AppState;

/// Idea-lab inputs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasRequest {
    pub business_type: Option<String>,
    pub problem: Option<String>,
}

/// Idea lists the model must return
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasResponse {
    pub website_features: Vec<String>,
    pub app_ideas: Vec<String>,
    pub automation_workflows: Vec<String>,
    pub crm_usage: Vec<String>,
    pub monetization: Vec<String>,
}

/// Generate categorized digital ideas for a business problem.
pub async fn generate_ideas(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateIdeasRequest>,
) -> Result<Json<IdeasResponse>, ApiError> {
    let business_type = require_field("businessType", payload.business_type)?;
    let problem = require_field("problem", payload.problem)?;

    let prompt = prompts::idea_generator_prompt(&business_type, &problem);

    let raw = state.gateway.complete(&prompt).await.map_err(|e| {
        error!("AI idea error: {}", e);
        ApiError::IdeaGeneration
    })?;

    let ideas: IdeasResponse = serde_json::from_str(&raw).map_err(|e| {
        error!("AI idea response was not the expected JSON shape: {}", e);
        ApiError::IdeaGeneration
    })?;

    Ok(Json(ideas))
}
