//! Repository Implementation
//!
//! Leads and growth plans in SQLite. `connect` opens or creates a database
//! file; `in_memory` backs local runs and tests when no database URL is
//! configured.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::StorageError;

/// Incoming contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub message: Option<String>,
}

/// Stored lead row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Growth-plan request fields plus the generated plan blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGrowthPlan {
    pub business_category: String,
    pub city: Option<String>,
    pub budget: Option<String>,
    pub goal: Option<String>,
    pub website_status: Option<String>,
    pub target_audience: Option<String>,
    pub competitors: Option<String>,
    pub usp: Option<String>,
    pub generated_plan: serde_json::Value,
}

/// Stored growth-plan row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPlanRecord {
    pub id: i64,
    pub business_category: String,
    pub city: Option<String>,
    pub budget: Option<String>,
    pub goal: Option<String>,
    pub website_status: Option<String>,
    pub target_audience: Option<String>,
    pub competitors: Option<String>,
    pub usp: Option<String>,
    pub generated_plan: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Repository for data access backed by a SQLite pool.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open (or create) a database file and apply the schema.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let repository = Self { pool };
        repository.apply_schema().await?;
        info!("Connected to SQLite database: {}", url);
        Ok(repository)
    }

    /// In-memory database for local runs and tests. Single connection:
    /// every new `:memory:` connection would otherwise see its own empty
    /// database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = Self::in_memory_pool_options()
            .connect("sqlite::memory:")
            .await?;

        let repository = Self { pool };
        repository.apply_schema().await?;
        info!("Created in-memory repository");
        Ok(repository)
    }

    /// Pool topology for `:memory:`. The lone connection must live as long
    /// as the pool itself: the idle and lifetime reapers would swap it for
    /// a fresh connection holding a brand-new empty database.
    fn in_memory_pool_options() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    }

    async fn apply_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS leads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                company TEXT,
                phone TEXT,
                business_type TEXT,
                message TEXT,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS growth_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                business_category TEXT NOT NULL,
                city TEXT,
                budget TEXT,
                goal TEXT,
                website_status TEXT,
                target_audience TEXT,
                competitors TEXT,
                usp TEXT,
                generated_plan TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a lead and return the stored row.
    pub async fn insert_lead(&self, lead: NewLead) -> Result<LeadRecord, StorageError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO leads (name, email, company, phone, business_type, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.company)
        .bind(&lead.phone)
        .bind(&lead.business_type)
        .bind(&lead.message)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted lead with ID {}", id);

        Ok(LeadRecord {
            id,
            name: lead.name,
            email: lead.email,
            company: lead.company,
            phone: lead.phone,
            business_type: lead.business_type,
            message: lead.message,
            created_at,
        })
    }

    /// Insert a growth plan (request fields plus generated blob) and
    /// return the stored row.
    pub async fn insert_growth_plan(
        &self,
        plan: NewGrowthPlan,
    ) -> Result<GrowthPlanRecord, StorageError> {
        let created_at = Utc::now();
        let blob = serde_json::to_string(&plan.generated_plan)?;
        let result = sqlx::query(
            "INSERT INTO growth_plans (business_category, city, budget, goal, website_status,
                target_audience, competitors, usp, generated_plan, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&plan.business_category)
        .bind(&plan.city)
        .bind(&plan.budget)
        .bind(&plan.goal)
        .bind(&plan.website_status)
        .bind(&plan.target_audience)
        .bind(&plan.competitors)
        .bind(&plan.usp)
        .bind(&blob)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted growth plan with ID {}", id);

        Ok(GrowthPlanRecord {
            id,
            business_category: plan.business_category,
            city: plan.city,
            budget: plan.budget,
            goal: plan.goal,
            website_status: plan.website_status,
            target_audience: plan.target_audience,
            competitors: plan.competitors,
            usp: plan.usp,
            generated_plan: plan.generated_plan,
            created_at,
        })
    }

    /// Total stored leads.
    pub async fn lead_count(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM leads")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    /// Total stored growth plans.
    pub async fn plan_count(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM growth_plans")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    /// Cheap liveness probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
