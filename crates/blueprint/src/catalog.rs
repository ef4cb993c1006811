//! Growth System Catalog
//!
//! The five marketing systems the agency sells, fixed at build time. Array
//! order matches the engine's placement pass, so list output follows it.

use serde::{Deserialize, Serialize};

/// Stable identifier for one growth system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKey {
    Website,
    Leads,
    Retention,
    Mvp,
    Scale,
}

/// One catalog entry as shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDefinition {
    pub key: SystemKey,
    pub display_name: &'static str,
    pub description: &'static str,
}

const WEBSITE: SystemDefinition = SystemDefinition {
    key: SystemKey::Website,
    display_name: "Growth Website",
    description: "Conversion-first website with SEO architecture, built to sell while you sleep.",
};

const LEADS: SystemDefinition = SystemDefinition {
    key: SystemKey::Leads,
    display_name: "Lead Automation",
    description: "AI chat capture that qualifies inquiries 24/7 and books them straight into your calendar.",
};

const RETENTION: SystemDefinition = SystemDefinition {
    key: SystemKey::Retention,
    display_name: "Retention Loops",
    description: "Automated email and SMS sequences that turn one-time buyers into repeat customers.",
};

const MVP: SystemDefinition = SystemDefinition {
    key: SystemKey::Mvp,
    display_name: "Rapid MVP",
    description: "A functional software prototype shipped in weeks so you can test the market fast.",
};

const SCALE: SystemDefinition = SystemDefinition {
    key: SystemKey::Scale,
    display_name: "Scale System",
    description: "Paid acquisition engine with performance analytics for high-volume scaling.",
};

/// Every system, in the order the placement pass walks them.
pub const CATALOG: [SystemDefinition; 5] = [WEBSITE, LEADS, RETENTION, MVP, SCALE];

/// Look up the static definition for a key.
pub fn definition(key: SystemKey) -> SystemDefinition {
    match key {
        SystemKey::Website => WEBSITE,
        SystemKey::Leads => LEADS,
        SystemKey::Retention => RETENTION,
        SystemKey::Mvp => MVP,
        SystemKey::Scale => SCALE,
    }
}
