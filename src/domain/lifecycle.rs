//! Ticket lifecycle - legal status transitions and who may invoke them
//!
//! States: open -> in_progress -> completed, plus open|in_progress ->
//! cancelled. Terminal states accept nothing. Validation runs before any
//! write; a failed check means the stored record is untouched.

use crate::contract::{Actor, MaintenanceError, Role, Ticket, TicketPatch, TicketStatus};
use uuid::Uuid;

/// Whether `from -> to` is a legal move in the state machine.
pub fn transition_allowed(from: TicketStatus, to: TicketStatus) -> bool {
    use TicketStatus::*;
    matches!(
        (from, to),
        (Open, InProgress) | (InProgress, Completed) | (Open, Cancelled) | (InProgress, Cancelled)
    )
}

/// Validate a status move, producing the domain error on an illegal one.
pub fn check_transition(from: TicketStatus, to: TicketStatus) -> Result<(), MaintenanceError> {
    if transition_allowed(from, to) {
        Ok(())
    } else {
        Err(MaintenanceError::invalid_transition(format!(
            "{} -> {}",
            from, to
        )))
    }
}

/// Whether the actor may work a ticket: the property's landlord, the
/// assigned technician, any technician while unassigned, or an admin.
fn can_work(actor: &Actor, ticket: &Ticket, property_landlord_id: Uuid) -> bool {
    match actor.role {
        Role::Landlord => property_landlord_id == actor.id,
        Role::Technician => ticket
            .technician_id
            .map_or(true, |assigned| assigned == actor.id),
        Role::Admin => true,
        Role::Tenant => false,
    }
}

/// Authorize a patch against the lifecycle rules.
///
/// Transition legality is checked before actor authorization so a move out
/// of a terminal state always reports `InvalidTransition`, regardless of
/// who asked.
pub fn authorize_patch(
    actor: &Actor,
    ticket: &Ticket,
    property_landlord_id: Uuid,
    patch: &TicketPatch,
) -> Result<(), MaintenanceError> {
    let worker = can_work(actor, ticket, property_landlord_id);

    if let Some(next) = patch.status {
        check_transition(ticket.status, next)?;

        let creator_cancel = next == TicketStatus::Cancelled
            && actor.role == Role::Tenant
            && ticket.tenant_id == actor.id;

        if !worker && !creator_cancel {
            return Err(MaintenanceError::unauthorized(format!(
                "{} {} may not move ticket {} to {}",
                actor.role, actor.id, ticket.id, next
            )));
        }
    } else if !worker {
        // Without a status change there is nothing a tenant may touch.
        return Err(MaintenanceError::unauthorized(format!(
            "{} {} may not update ticket {}",
            actor.role, actor.id, ticket.id
        )));
    }

    if patch.technician_id.is_some() {
        if actor.role == Role::Tenant {
            return Err(MaintenanceError::unauthorized(
                "tenants may not assign technicians",
            ));
        }
        // Assignment rides along with a cancel/complete in the same patch,
        // but never lands on an already-terminal ticket.
        if ticket.status.is_terminal() {
            return Err(MaintenanceError::validation(format!(
                "cannot assign a technician to a {} ticket",
                ticket.status
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Priority;
    use chrono::Utc;

    fn ticket(status: TicketStatus, tenant_id: Uuid, technician_id: Option<Uuid>) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            unit_id: Uuid::new_v4(),
            tenant_id,
            technician_id,
            title: "Broken heater".to_string(),
            description: "No heat in unit".to_string(),
            category: "HVAC".to_string(),
            priority: Priority::High,
            status,
            images: Vec::new(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn status_patch(status: TicketStatus) -> TicketPatch {
        TicketPatch {
            status: Some(status),
            ..TicketPatch::default()
        }
    }

    #[test]
    fn transition_matrix() {
        use TicketStatus::*;
        let legal = [
            (Open, InProgress),
            (InProgress, Completed),
            (Open, Cancelled),
            (InProgress, Cancelled),
        ];
        for status in [Open, InProgress, Completed, Cancelled] {
            for next in [Open, InProgress, Completed, Cancelled] {
                assert_eq!(
                    transition_allowed(status, next),
                    legal.contains(&(status, next)),
                    "{} -> {}",
                    status,
                    next
                );
            }
        }
    }

    #[test]
    fn terminal_states_reject_everything() {
        use TicketStatus::*;
        for terminal in [Completed, Cancelled] {
            for next in [Open, InProgress, Completed, Cancelled] {
                assert!(check_transition(terminal, next).is_err());
            }
        }
    }

    #[test]
    fn landlord_of_property_may_progress_ticket() {
        let landlord = Actor::new(Uuid::new_v4(), Role::Landlord);
        let t = ticket(TicketStatus::Open, Uuid::new_v4(), None);

        assert!(authorize_patch(&landlord, &t, landlord.id, &status_patch(TicketStatus::InProgress)).is_ok());
        // Same role, different property owner: denied.
        let result = authorize_patch(
            &landlord,
            &t,
            Uuid::new_v4(),
            &status_patch(TicketStatus::InProgress),
        );
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn any_technician_may_take_unassigned_ticket() {
        let tech = Actor::new(Uuid::new_v4(), Role::Technician);
        let unassigned = ticket(TicketStatus::Open, Uuid::new_v4(), None);
        let foreign = ticket(TicketStatus::Open, Uuid::new_v4(), Some(Uuid::new_v4()));

        assert!(authorize_patch(&tech, &unassigned, Uuid::new_v4(), &status_patch(TicketStatus::InProgress)).is_ok());
        let result = authorize_patch(
            &tech,
            &foreign,
            Uuid::new_v4(),
            &status_patch(TicketStatus::InProgress),
        );
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn creating_tenant_may_cancel_open_ticket_only() {
        let tenant = Actor::new(Uuid::new_v4(), Role::Tenant);
        let own = ticket(TicketStatus::Open, tenant.id, None);
        let landlord_id = Uuid::new_v4();

        assert!(authorize_patch(&tenant, &own, landlord_id, &status_patch(TicketStatus::Cancelled)).is_ok());
        // But a tenant may not complete their own ticket.
        let result = authorize_patch(&tenant, &own, landlord_id, &status_patch(TicketStatus::InProgress));
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn other_tenant_may_not_cancel() {
        let stranger = Actor::new(Uuid::new_v4(), Role::Tenant);
        let t = ticket(TicketStatus::Open, Uuid::new_v4(), None);

        let result = authorize_patch(&stranger, &t, Uuid::new_v4(), &status_patch(TicketStatus::Cancelled));
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn completed_ticket_rejects_cancel_as_invalid_transition() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let t = ticket(TicketStatus::Completed, Uuid::new_v4(), None);

        let result = authorize_patch(&admin, &t, Uuid::new_v4(), &status_patch(TicketStatus::Cancelled));
        assert!(matches!(result, Err(MaintenanceError::InvalidTransition { .. })));
    }

    #[test]
    fn tenant_may_not_assign_technician_even_when_cancelling() {
        let tenant = Actor::new(Uuid::new_v4(), Role::Tenant);
        let own = ticket(TicketStatus::Open, tenant.id, None);
        let patch = TicketPatch {
            status: Some(TicketStatus::Cancelled),
            technician_id: Some(Uuid::new_v4()),
            ..TicketPatch::default()
        };

        let result = authorize_patch(&tenant, &own, Uuid::new_v4(), &patch);
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn notes_only_patch_requires_worker() {
        let landlord = Actor::new(Uuid::new_v4(), Role::Landlord);
        let tenant = Actor::new(Uuid::new_v4(), Role::Tenant);
        let t = ticket(TicketStatus::InProgress, tenant.id, None);
        let patch = TicketPatch {
            notes: Some("ordered replacement part".to_string()),
            ..TicketPatch::default()
        };

        assert!(authorize_patch(&landlord, &t, landlord.id, &patch).is_ok());
        let result = authorize_patch(&tenant, &t, landlord.id, &patch);
        assert!(matches!(result, Err(MaintenanceError::Unauthorized { .. })));
    }

    #[test]
    fn assignment_on_terminal_ticket_is_rejected() {
        let landlord = Actor::new(Uuid::new_v4(), Role::Landlord);
        let t = ticket(TicketStatus::Cancelled, Uuid::new_v4(), None);
        let patch = TicketPatch {
            technician_id: Some(Uuid::new_v4()),
            ..TicketPatch::default()
        };

        let result = authorize_patch(&landlord, &t, landlord.id, &patch);
        assert!(matches!(result, Err(MaintenanceError::Validation { .. })));
    }
}
