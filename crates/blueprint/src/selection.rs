//! Wizard selection state
//!
//! The four answers a visitor gives in the qualification wizard. Each enum
//! mirrors one wizard step; unknown tokens are rejected at the boundary so
//! the engine itself stays total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a wizard token does not match any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected one of {expected}, got {value:?}")]
pub struct ParseSelectionError {
    /// Wire-level field name the bad token arrived under.
    pub field: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// What kind of business the visitor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessContext {
    Service,
    Clinic,
    Startup,
    Local,
    Ecommerce,
}

impl BusinessContext {
    pub const ALL: [BusinessContext; 5] = [
        BusinessContext::Service,
        BusinessContext::Clinic,
        BusinessContext::Startup,
        BusinessContext::Local,
        BusinessContext::Ecommerce,
    ];

    /// Human phrasing used inside generated insight copy.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessContext::Service => "service business",
            BusinessContext::Clinic => "clinic",
            BusinessContext::Startup => "startup",
            BusinessContext::Local => "local business",
            BusinessContext::Ecommerce => "e-commerce brand",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessContext::Service => "service",
            BusinessContext::Clinic => "clinic",
            BusinessContext::Startup => "startup",
            BusinessContext::Local => "local",
            BusinessContext::Ecommerce => "ecommerce",
        }
    }
}

impl FromStr for BusinessContext {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(BusinessContext::Service),
            "clinic" => Ok(BusinessContext::Clinic),
            "startup" => Ok(BusinessContext::Startup),
            "local" => Ok(BusinessContext::Local),
            "ecommerce" => Ok(BusinessContext::Ecommerce),
            other => Err(ParseSelectionError {
                field: "businessContext",
                expected: "service, clinic, startup, local, ecommerce",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BusinessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far along the business is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Early,
    Growth,
    Scaling,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 3] = [GrowthStage::Early, GrowthStage::Growth, GrowthStage::Scaling];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Early => "early",
            GrowthStage::Growth => "growth",
            GrowthStage::Scaling => "scaling",
        }
    }
}

impl FromStr for GrowthStage {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early" => Ok(GrowthStage::Early),
            "growth" => Ok(GrowthStage::Growth),
            "scaling" => Ok(GrowthStage::Scaling),
            other => Err(ParseSelectionError {
                field: "growthStage",
                expected: "early, growth, scaling",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly spend bracket the visitor picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Starter,
    Growth,
    Scale,
    Enterprise,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::Starter,
        Budget::Growth,
        Budget::Scale,
        Budget::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Starter => "starter",
            Budget::Growth => "growth",
            Budget::Scale => "scale",
            Budget::Enterprise => "enterprise",
        }
    }
}

impl FromStr for Budget {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Budget::Starter),
            "growth" => Ok(Budget::Growth),
            "scale" => Ok(Budget::Scale),
            "enterprise" => Ok(Budget::Enterprise),
            other => Err(ParseSelectionError {
                field: "budget",
                expected: "starter, growth, scale, enterprise",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome the visitor says they want most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryGoal {
    Leads,
    Sales,
    Revenue,
    Validation,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 4] = [
        PrimaryGoal::Leads,
        PrimaryGoal::Sales,
        PrimaryGoal::Revenue,
        PrimaryGoal::Validation,
    ];

    /// Human phrasing used inside generated insight copy.
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::Leads => "new leads",
            PrimaryGoal::Sales => "sales",
            PrimaryGoal::Revenue => "revenue",
            PrimaryGoal::Validation => "validation",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::Leads => "leads",
            PrimaryGoal::Sales => "sales",
            PrimaryGoal::Revenue => "revenue",
            PrimaryGoal::Validation => "validation",
        }
    }
}

impl FromStr for PrimaryGoal {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leads" => Ok(PrimaryGoal::Leads),
            "sales" => Ok(PrimaryGoal::Sales),
            "revenue" => Ok(PrimaryGoal::Revenue),
            "validation" => Ok(PrimaryGoal::Validation),
            other => Err(ParseSelectionError {
                field: "primaryGoal",
                expected: "leads, sales, revenue, validation",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One complete pass through the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub business_context: BusinessContext,
    pub growth_stage: GrowthStage,
    pub budget: Budget,
    pub primary_goal: PrimaryGoal,
}

impl SelectionState {
    pub fn new(
        business_context: BusinessContext,
        growth_stage: GrowthStage,
        budget: Budget,
        primary_goal: PrimaryGoal,
    ) -> Self {
        Self {
            business_context,
            growth_stage,
            budget,
            primary_goal,
        }
    }
}
