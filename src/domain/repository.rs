//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs; the integration
//! tests carry in-memory mocks.

use crate::contract::{LeaseStatus, LeasedUnit, Ticket, TicketPatch, TicketView};
use crate::domain::access::TicketScope;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for maintenance tickets.
///
/// Every read re-hydrates the full join shape (unit -> property, tenant
/// profile, technician profile); callers never see a bare row.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Persist a new ticket.
    async fn insert(&self, ticket: &Ticket) -> Result<()>;

    /// Find one ticket with its join shape resolved.
    async fn find_view(&self, id: Uuid) -> Result<Option<TicketView>>;

    /// Find a ticket together with the landlord owning its property
    /// (resolved through unit -> property), for lifecycle authorization.
    async fn find_with_owner(&self, id: Uuid) -> Result<Option<(Ticket, Uuid)>>;

    /// List tickets visible under a scope, join shape resolved.
    async fn list_views(&self, scope: &TicketScope) -> Result<Vec<TicketView>>;

    /// Merge the patch into the stored record in one write. Returns `false`
    /// when the ticket no longer exists.
    async fn apply_patch(&self, id: Uuid, patch: &TicketPatch) -> Result<bool>;

    /// Physically remove a ticket. Returns `false` when absent.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Repository for leases and unit lookups.
#[async_trait]
pub trait LeaseRepository: Send + Sync {
    /// Whether a unit exists.
    async fn unit_exists(&self, unit_id: Uuid) -> Result<bool>;

    /// Units leased by a tenant in the given lease state, with property
    /// context resolved.
    async fn units_for_tenant(&self, tenant_id: Uuid, status: LeaseStatus)
        -> Result<Vec<LeasedUnit>>;
}
