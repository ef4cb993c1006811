//! Route Handlers

pub mod blueprint;
pub mod growth_plan;
pub mod ideas;
pub mod leads;

use crate::error::ApiError;

/// Pull a required value out of an optional payload slot.
///
/// Request structs keep every field optional so a missing key surfaces as a
/// field-level validation error instead of a blanket decode failure.
pub(crate) fn require_field(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::required(field))
}
