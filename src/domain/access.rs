//! Role filter - maps an actor to a ticket visibility predicate
//!
//! Pure and deterministic. The same scope is evaluated two ways: in memory
//! via [`TicketScope::permits`] (tests, mocks) and as a SQL restriction in
//! `infra::storage::repositories`, which must agree with it.

use crate::contract::{Actor, Role, Ticket};
use uuid::Uuid;

/// Visibility restriction applied to every ticket listing/detail query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// Tickets created by this tenant.
    TenantOwn(Uuid),
    /// Tickets assigned to this technician.
    TechnicianAssigned(Uuid),
    /// Tickets on units whose property belongs to this landlord.
    LandlordOwned(Uuid),
    /// No restriction. Only handed to trusted internal callers and admins,
    /// never derived from an unauthenticated request.
    Unrestricted,
    /// Matches nothing. Fail-closed scope for identities whose role could
    /// not be resolved to the closed [`Role`] enum.
    DenyAll,
}

impl TicketScope {
    /// The restriction for a resolved actor. Total over [`Role`]; unknown
    /// roles never reach this point (they become [`TicketScope::DenyAll`]
    /// at the parse boundary).
    pub fn for_actor(actor: &Actor) -> Self {
        match actor.role {
            Role::Tenant => TicketScope::TenantOwn(actor.id),
            Role::Technician => TicketScope::TechnicianAssigned(actor.id),
            Role::Landlord => TicketScope::LandlordOwned(actor.id),
            Role::Admin => TicketScope::Unrestricted,
        }
    }

    /// Evaluate the predicate against a ticket and the landlord owning the
    /// ticket's property (resolved through unit -> property).
    pub fn permits(&self, ticket: &Ticket, property_landlord_id: Uuid) -> bool {
        match self {
            TicketScope::TenantOwn(id) => ticket.tenant_id == *id,
            TicketScope::TechnicianAssigned(id) => ticket.technician_id == Some(*id),
            TicketScope::LandlordOwned(id) => property_landlord_id == *id,
            TicketScope::Unrestricted => true,
            TicketScope::DenyAll => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Priority, TicketStatus};
    use chrono::Utc;

    fn ticket(tenant_id: Uuid, technician_id: Option<Uuid>) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            unit_id: Uuid::new_v4(),
            tenant_id,
            technician_id,
            title: "Leaking faucet".to_string(),
            description: "Kitchen faucet drips".to_string(),
            category: "Plumbing".to_string(),
            priority: Priority::Low,
            status: TicketStatus::Open,
            images: Vec::new(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tenant_scope_matches_only_own_tickets() {
        let tenant = Uuid::new_v4();
        let other = Uuid::new_v4();
        let landlord = Uuid::new_v4();
        let scope = TicketScope::for_actor(&Actor::new(tenant, Role::Tenant));

        assert!(scope.permits(&ticket(tenant, None), landlord));
        assert!(!scope.permits(&ticket(other, None), landlord));
    }

    #[test]
    fn technician_scope_matches_only_assigned_tickets() {
        let tech = Uuid::new_v4();
        let landlord = Uuid::new_v4();
        let scope = TicketScope::for_actor(&Actor::new(tech, Role::Technician));

        assert!(scope.permits(&ticket(Uuid::new_v4(), Some(tech)), landlord));
        assert!(!scope.permits(&ticket(Uuid::new_v4(), None), landlord));
        assert!(!scope.permits(&ticket(Uuid::new_v4(), Some(Uuid::new_v4())), landlord));
    }

    #[test]
    fn landlord_scope_matches_through_ownership_chain() {
        let landlord = Uuid::new_v4();
        let scope = TicketScope::for_actor(&Actor::new(landlord, Role::Landlord));

        assert!(scope.permits(&ticket(Uuid::new_v4(), None), landlord));
        assert!(!scope.permits(&ticket(Uuid::new_v4(), None), Uuid::new_v4()));
    }

    #[test]
    fn admin_scope_is_unrestricted() {
        let scope = TicketScope::for_actor(&Actor::new(Uuid::new_v4(), Role::Admin));
        assert_eq!(scope, TicketScope::Unrestricted);
        assert!(scope.permits(&ticket(Uuid::new_v4(), None), Uuid::new_v4()));
    }

    #[test]
    fn deny_all_matches_nothing() {
        let tenant = Uuid::new_v4();
        let landlord = Uuid::new_v4();
        assert!(!TicketScope::DenyAll.permits(&ticket(tenant, None), landlord));
    }
}
