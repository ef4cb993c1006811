//! Blueprint Engine
//!
//! Turns one wizard pass into a prioritized bundle:
//! - one core system, chosen by the first matching rule in a fixed table
//! - supporting systems the profile is ready for
//! - deferred systems, each with the reason shown in the wizard
//!
//! A closing pass guarantees every catalog system lands in exactly one
//! bucket, so the output always partitions all five systems.

use serde::Serialize;

use crate::catalog::{definition, SystemDefinition, SystemKey, CATALOG};
use crate::selection::{Budget, BusinessContext, GrowthStage, PrimaryGoal, SelectionState};

/// Deferral copy for Scale System below the spend threshold.
pub const REASON_AD_SPEND: &str = "Requires > ₹50k ad spend";
/// Deferral copy for Rapid MVP in a startup profile.
pub const REASON_NOT_IMMEDIATE: &str = "Not immediate priority";
/// Deferral copy for Rapid MVP once validation is behind the business.
pub const REASON_VALIDATION_DONE: &str = "Validation Phase Complete";
/// Deferral copy for Scale System without scaling momentum.
pub const REASON_HIGH_VOLUME: &str = "Reserved for high-volume scaling";
/// Deferral copy applied by the closing pass to anything still unplaced.
pub const REASON_INACTIVE: &str = "Inactive for current model";

/// A system parked for later, with the reason shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeferredSystem {
    pub system: SystemDefinition,
    pub reason: String,
}

/// The full recommendation for one wizard pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub core_system: SystemDefinition,
    pub supporting_systems: Vec<SystemDefinition>,
    pub deferred_systems: Vec<DeferredSystem>,
    pub insight: String,
}

/// One row of the core-selection table.
struct CoreRule {
    applies: fn(&SelectionState) -> bool,
    core: SystemKey,
    insight: fn(&SelectionState) -> String,
}

/// Core selection, first match wins. Order is load-bearing: the early
/// e-commerce row must sit above the general e-commerce row.
const CORE_RULES: [CoreRule; 5] = [
    CoreRule {
        applies: |s| {
            s.primary_goal == PrimaryGoal::Validation
                || (s.business_context == BusinessContext::Startup
                    && s.growth_stage == GrowthStage::Early)
        },
        core: SystemKey::Mvp,
        insight: |s| {
            format!(
                "Proof beats polish at this stage. We ship a Rapid MVP first so your {} \
                 can earn real-market validation before heavier growth spend.",
                s.business_context.label()
            )
        },
    },
    CoreRule {
        applies: |s| {
            matches!(
                s.business_context,
                BusinessContext::Service | BusinessContext::Clinic | BusinessContext::Local
            ) && s.growth_stage == GrowthStage::Early
        },
        core: SystemKey::Website,
        insight: |s| {
            format!(
                "An early-stage {} wins by owning search and first impressions. \
                 A Growth Website becomes your 24/7 storefront before anything else.",
                s.business_context.label()
            )
        },
    },
    CoreRule {
        applies: |s| {
            s.business_context == BusinessContext::Ecommerce && s.growth_stage == GrowthStage::Early
        },
        core: SystemKey::Website,
        insight: |_| {
            "Early e-commerce lives or dies on conversion. We tune your storefront \
             experience before you pay to send traffic to it."
                .to_string()
        },
    },
    CoreRule {
        applies: |s| {
            s.business_context == BusinessContext::Ecommerce
                || (s.primary_goal == PrimaryGoal::Revenue && s.growth_stage != GrowthStage::Early)
        },
        core: SystemKey::Retention,
        insight: |s| {
            format!(
                "Repeat buyers are the cheapest growth you will ever buy. \
                 Retention Loops compound {} without raising ad spend.",
                s.primary_goal.label()
            )
        },
    },
    CoreRule {
        applies: |s| {
            matches!(s.budget, Budget::Scale | Budget::Enterprise)
                && s.growth_stage == GrowthStage::Scaling
        },
        core: SystemKey::Scale,
        insight: |_| {
            "You have the budget and the momentum. A dedicated Scale System turns \
             paid acquisition into a measurable machine."
                .to_string()
        },
    },
];

/// Fallthrough when no table row matches.
const DEFAULT_RULE: CoreRule = CoreRule {
    applies: |_| true,
    core: SystemKey::Leads,
    insight: |s| {
        format!(
            "Consistent pipeline beats everything. Lead Automation keeps {} \
             flowing while you stay focused on delivery.",
            s.primary_goal.label()
        )
    },
};

/// Where a non-core system lands; `None` means the closing pass decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Supporting,
    Deferred(&'static str),
}

/// Reason copy for a deferred Rapid MVP. Kept keyed on context to match the
/// wizard copy even though the supporting guard currently shields the
/// startup case.
fn mvp_deferral_reason(selection: &SelectionState) -> &'static str {
    if selection.business_context == BusinessContext::Startup {
        REASON_NOT_IMMEDIATE
    } else {
        REASON_VALIDATION_DONE
    }
}

/// Placement of one non-core system for a given profile.
fn placement(key: SystemKey, selection: &SelectionState) -> Option<Placement> {
    match key {
        SystemKey::Website => Some(Placement::Supporting),
        SystemKey::Leads => {
            if selection.growth_stage != GrowthStage::Early
                || selection.primary_goal == PrimaryGoal::Leads
                || selection.business_context == BusinessContext::Service
            {
                Some(Placement::Supporting)
            } else {
                None
            }
        }
        SystemKey::Retention => {
            if selection.business_context == BusinessContext::Ecommerce
                || selection.primary_goal == PrimaryGoal::Revenue
                || selection.growth_stage == GrowthStage::Scaling
            {
                Some(Placement::Supporting)
            } else {
                None
            }
        }
        SystemKey::Mvp => {
            if selection.business_context == BusinessContext::Startup
                || selection.primary_goal == PrimaryGoal::Validation
            {
                Some(Placement::Supporting)
            } else {
                Some(Placement::Deferred(mvp_deferral_reason(selection)))
            }
        }
        SystemKey::Scale => {
            if matches!(selection.budget, Budget::Starter | Budget::Growth) {
                Some(Placement::Deferred(REASON_AD_SPEND))
            } else if selection.growth_stage == GrowthStage::Scaling
                || selection.primary_goal == PrimaryGoal::Revenue
            {
                Some(Placement::Supporting)
            } else {
                Some(Placement::Deferred(REASON_HIGH_VOLUME))
            }
        }
    }
}

/// Generate the blueprint for one wizard pass. Total over the enum domain;
/// the same selection always yields the same blueprint.
pub fn generate_blueprint(selection: &SelectionState) -> Blueprint {
    let rule = CORE_RULES
        .iter()
        .find(|rule| (rule.applies)(selection))
        .unwrap_or(&DEFAULT_RULE);

    let mut supporting = Vec::new();
    let mut deferred = Vec::new();
    let mut unplaced = Vec::new();

    for entry in CATALOG {
        if entry.key == rule.core {
            continue;
        }
        match placement(entry.key, selection) {
            Some(Placement::Supporting) => supporting.push(entry),
            Some(Placement::Deferred(reason)) => deferred.push(DeferredSystem {
                system: entry,
                reason: reason.to_string(),
            }),
            None => unplaced.push(entry),
        }
    }

    // Closing pass: nothing may fall out of the blueprint entirely.
    for entry in unplaced {
        deferred.push(DeferredSystem {
            system: entry,
            reason: REASON_INACTIVE.to_string(),
        });
    }

    // Growth Website leads the supporting list; the rest keep placement order.
    supporting.sort_by_key(|entry| entry.key != SystemKey::Website);

    Blueprint {
        core_system: definition(rule.core),
        supporting_systems: supporting,
        deferred_systems: deferred,
        insight: (rule.insight)(selection),
    }
}
