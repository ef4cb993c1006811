//! Growth Plan Routes
//!
//! Proxies the plan wizard through the model gateway and persists every
//! successful plan alongside the inputs that produced it.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use storage::NewGrowthPlan;

use crate::error::ApiError;
use crate::prompts;
use crate::routes::require_field;
use crate::AppState;

/// Business profile from the plan wizard
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub business_category: Option<String>,
    pub city: Option<String>,
    pub budget: Option<String>,
    pub goal: Option<String>,
    pub website_status: Option<String>,
    pub target_audience: Option<String>,
    pub competitors: Option<String>,
    pub usp: Option<String>,
}

/// Plan shape the model must return
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub marketing_channels: Vec<String>,
    pub website_needs: Vec<String>,
    pub automations: Vec<String>,
    pub timeline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why_hire_webkit24: Option<String>,
}

/// Generate a 360° growth plan and persist it.
pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GeneratePlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let business_category = require_field("businessCategory", payload.business_category)?;
    let goal = require_field("goal", payload.goal)?;

    let prompt = prompts::growth_plan_prompt(
        &business_category,
        payload.city.as_deref(),
        payload.budget.as_deref(),
        &goal,
    );

    let raw = state.gateway.complete(&prompt).await.map_err(|e| {
        error!("AI plan error: {}", e);
        ApiError::PlanGeneration
    })?;

    let plan: PlanResponse = serde_json::from_str(&raw).map_err(|e| {
        error!("AI plan response was not the expected JSON shape: {}", e);
        ApiError::PlanGeneration
    })?;

    let blob: Value = serde_json::to_value(&plan).map_err(|e| {
        error!("Failed to serialize plan blob: {}", e);
        ApiError::PlanGeneration
    })?;

    let stored = state
        .repository
        .insert_growth_plan(NewGrowthPlan {
            business_category,
            city: payload.city,
            budget: payload.budget,
            goal: Some(goal),
            website_status: payload.website_status,
            target_audience: payload.target_audience,
            competitors: payload.competitors,
            usp: payload.usp,
            generated_plan: blob,
        })
        .await
        .map_err(|e| {
            error!("Failed to store growth plan: {}", e);
            ApiError::PlanGeneration
        })?;

    debug!("Stored growth plan {}", stored.id);
    Ok(Json(plan))
}
