//! Growth Blueprint Engine
//!
//! Deterministic mapping from the four wizard answers to a prioritized
//! bundle of growth systems: one core system, a supporting list, and a
//! deferred list with reasons. Pure and total; the same selection always
//! produces the same blueprint.

mod catalog;
mod engine;
mod selection;

pub use catalog::{definition, SystemDefinition, SystemKey, CATALOG};
pub use engine::{
    generate_blueprint, Blueprint, DeferredSystem, REASON_AD_SPEND, REASON_HIGH_VOLUME,
    REASON_INACTIVE, REASON_NOT_IMMEDIATE, REASON_VALIDATION_DONE,
};
pub use selection::{
    Budget, BusinessContext, GrowthStage, ParseSelectionError, PrimaryGoal, SelectionState,
};
