//! Draft validation - runs before any write reaches the store

use crate::contract::{MaintenanceError, TicketDraft};

/// Validate a ticket draft. Field presence (unit_id, priority range) is
/// enforced by the types at the DTO boundary; this checks content.
pub fn validate_draft(draft: &TicketDraft) -> Result<(), MaintenanceError> {
    if draft.title.trim().is_empty() {
        return Err(MaintenanceError::validation("title is required"));
    }
    if draft.description.trim().is_empty() {
        return Err(MaintenanceError::validation("description is required"));
    }
    if draft.category.trim().is_empty() {
        return Err(MaintenanceError::validation("category is required"));
    }
    Ok(())
}
