//! Lead Capture Routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use storage::{LeadRecord, NewLead};

use crate::error::ApiError;
use crate::routes::require_field;
use crate::AppState;

/// Contact-form payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub message: Option<String>,
}

impl CreateLeadRequest {
    fn validate(self) -> Result<NewLead, ApiError> {
        Ok(NewLead {
            name: require_field("name", self.name)?,
            email: require_field("email", self.email)?,
            company: self.company,
            phone: self.phone,
            business_type: self.business_type,
            message: self.message,
        })
    }
}

/// Capture a contact lead, returning the stored record.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadRecord>), ApiError> {
    let lead = payload.validate()?;

    let stored = state.repository.insert_lead(lead).await.map_err(|e| {
        error!("Failed to store lead: {}", e);
        ApiError::Internal
    })?;

    info!("Captured lead {} <{}>", stored.id, stored.email);
    Ok((StatusCode::CREATED, Json(stored)))
}
