//! Blueprint Routes
//!
//! Deterministic endpoint: no model calls, no persistence. The wizard
//! posts four answers and gets the full system bundle back.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use blueprint::{generate_blueprint, Blueprint, ParseSelectionError, SelectionState};

use crate::error::ApiError;
use crate::routes::require_field;

/// Wizard answers as raw tokens
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRequest {
    pub business_context: Option<String>,
    pub growth_stage: Option<String>,
    pub budget: Option<String>,
    pub primary_goal: Option<String>,
}

impl BlueprintRequest {
    fn parse(self) -> Result<SelectionState, ApiError> {
        Ok(SelectionState::new(
            parse_token("businessContext", self.business_context)?,
            parse_token("growthStage", self.growth_stage)?,
            parse_token("budget", self.budget)?,
            parse_token("primaryGoal", self.primary_goal)?,
        ))
    }
}

fn parse_token<T>(field: &'static str, value: Option<String>) -> Result<T, ApiError>
where
    T: std::str::FromStr<Err = ParseSelectionError>,
{
    require_field(field, value)?
        .parse()
        .map_err(|e: ParseSelectionError| ApiError::Validation {
            message: e.to_string(),
            field: e.field.to_string(),
        })
}

/// Generate the recommendation bundle for one wizard pass.
pub async fn generate(Json(payload): Json<BlueprintRequest>) -> Result<Json<Blueprint>, ApiError> {
    let selection = payload.parse()?;
    debug!("Generating blueprint for {:?}", selection);
    Ok(Json(generate_blueprint(&selection)))
}
