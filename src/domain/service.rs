//! Domain service - the data access gateway
//!
//! Single point through which tickets are read and written. Composes the
//! role filter with the repository join shape and runs lifecycle validation
//! before any write. All state lives in the store; the service itself holds
//! only repository handles, so calls are request-scoped and race at the
//! store as last-write-wins.

use crate::contract::{
    Actor, LeaseStatus, LeasedUnit, MaintenanceError, Role, Ticket, TicketDraft, TicketPatch,
    TicketStatus, TicketView,
};
use crate::domain::access::TicketScope;
use crate::domain::repository::{LeaseRepository, TicketRepository};
use crate::domain::{lifecycle, validation};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Data access gateway for maintenance tickets and tenant units.
pub struct Service {
    tickets: Arc<dyn TicketRepository>,
    leases: Arc<dyn LeaseRepository>,
}

impl Service {
    pub fn new(tickets: Arc<dyn TicketRepository>, leases: Arc<dyn LeaseRepository>) -> Self {
        Self { tickets, leases }
    }

    /// One ticket with its full join shape, without a visibility check.
    /// For trusted internal callers; HTTP callers go through [`Self::ticket_for`].
    pub async fn ticket(&self, id: Uuid) -> Result<TicketView, MaintenanceError> {
        self.tickets
            .find_view(id)
            .await
            .map_err(MaintenanceError::store)?
            .ok_or_else(|| MaintenanceError::not_found("ticket", id))
    }

    /// One ticket, visible to the actor per the role filter.
    pub async fn ticket_for(&self, actor: &Actor, id: Uuid) -> Result<TicketView, MaintenanceError> {
        let (ticket, landlord_id) = self.load_with_owner(id).await?;
        let scope = TicketScope::for_actor(actor);
        if !scope.permits(&ticket, landlord_id) {
            return Err(MaintenanceError::unauthorized(format!(
                "{} {} may not view ticket {}",
                actor.role, actor.id, id
            )));
        }
        self.ticket(id).await
    }

    /// List tickets visible under a scope.
    ///
    /// [`TicketScope::Unrestricted`] is reserved for admin and trusted
    /// internal contexts; the REST layer never builds it from an
    /// unauthenticated request.
    pub async fn tickets(&self, scope: &TicketScope) -> Result<Vec<TicketView>, MaintenanceError> {
        self.tickets
            .list_views(scope)
            .await
            .map_err(MaintenanceError::store)
    }

    /// Create a ticket for the authenticated tenant.
    ///
    /// tenant_id always comes from the actor and status is forced to `open`;
    /// whatever a client put in its payload beyond the draft fields is gone
    /// by the time this is called.
    pub async fn create_ticket(
        &self,
        actor: &Actor,
        draft: TicketDraft,
    ) -> Result<TicketView, MaintenanceError> {
        if actor.role != Role::Tenant {
            return Err(MaintenanceError::unauthorized(format!(
                "only tenants open tickets, not {}",
                actor.role
            )));
        }
        validation::validate_draft(&draft)?;

        if !self
            .leases
            .unit_exists(draft.unit_id)
            .await
            .map_err(MaintenanceError::store)?
        {
            return Err(MaintenanceError::validation(format!(
                "unit {} does not exist",
                draft.unit_id
            )));
        }

        let now = Utc::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            unit_id: draft.unit_id,
            tenant_id: actor.id,
            technician_id: None,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            status: TicketStatus::Open,
            images: draft.images,
            notes: None,
            created_at: now,
            updated_at: now,
        };

        self.tickets
            .insert(&ticket)
            .await
            .map_err(MaintenanceError::store)?;
        tracing::info!(ticket_id = %ticket.id, tenant_id = %actor.id, "ticket created");

        // Re-fetch so the caller gets the joined shape.
        self.ticket(ticket.id).await
    }

    /// Apply a partial update after lifecycle and authorization checks.
    /// Validation failures leave the stored record untouched.
    pub async fn update_ticket(
        &self,
        actor: &Actor,
        id: Uuid,
        patch: TicketPatch,
    ) -> Result<TicketView, MaintenanceError> {
        if patch.is_empty() {
            return Err(MaintenanceError::validation("no fields to update"));
        }

        let (ticket, landlord_id) = self.load_with_owner(id).await?;
        lifecycle::authorize_patch(actor, &ticket, landlord_id, &patch)?;

        let applied = self
            .tickets
            .apply_patch(id, &patch)
            .await
            .map_err(MaintenanceError::store)?;
        if !applied {
            return Err(MaintenanceError::not_found("ticket", id));
        }
        if let Some(status) = patch.status {
            tracing::info!(ticket_id = %id, from = %ticket.status, to = %status, "ticket transitioned");
        }

        self.ticket(id).await
    }

    /// Administrative removal. Tickets are normally soft-retired via
    /// status=cancelled; only admins may delete rows.
    pub async fn delete_ticket(&self, actor: &Actor, id: Uuid) -> Result<(), MaintenanceError> {
        if actor.role != Role::Admin {
            return Err(MaintenanceError::unauthorized(format!(
                "{} {} may not delete tickets",
                actor.role, actor.id
            )));
        }
        let removed = self
            .tickets
            .delete(id)
            .await
            .map_err(MaintenanceError::store)?;
        if !removed {
            return Err(MaintenanceError::not_found("ticket", id));
        }
        tracing::warn!(ticket_id = %id, admin_id = %actor.id, "ticket deleted");
        Ok(())
    }

    /// Units leased by a tenant in the given lease state.
    pub async fn units_for_tenant(
        &self,
        tenant_id: Uuid,
        status: LeaseStatus,
    ) -> Result<Vec<LeasedUnit>, MaintenanceError> {
        self.leases
            .units_for_tenant(tenant_id, status)
            .await
            .map_err(MaintenanceError::store)
    }

    async fn load_with_owner(&self, id: Uuid) -> Result<(Ticket, Uuid), MaintenanceError> {
        self.tickets
            .find_with_owner(id)
            .await
            .map_err(MaintenanceError::store)?
            .ok_or_else(|| MaintenanceError::not_found("ticket", id))
    }
}
