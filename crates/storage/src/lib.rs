//! Storage Layer
//!
//! SQLite persistence with repository pattern for captured leads and
//! generated growth plans.

mod repository;

pub use repository::{GrowthPlanRecord, LeadRecord, NewGrowthPlan, NewLead, Repository};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
