//! Contract models for the property management service
//!
//! These models are transport-agnostic. NO serde derives - pure domain types;
//! the REST DTOs in `api::rest::dto` carry the wire shapes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Actor role, authoritative for access control.
///
/// Closed enum on purpose: adding a role forces every `match` over roles to
/// be revisited at compile time. Unknown role strings are rejected at the
/// parse boundary and treated as "matches nothing" by the role filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Landlord,
    Tenant,
    Technician,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Landlord => "landlord",
            Role::Tenant => "tenant",
            Role::Technician => "technician",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored/transported role value. Returns `None` for anything
    /// outside the closed set so callers fail closed.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "landlord" => Some(Role::Landlord),
            "tenant" => Some(Role::Tenant),
            "technician" => Some(Role::Technician),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated actor context, resolved upstream and passed explicitly into
/// every gateway call - never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

/// Maintenance ticket status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Completed => "completed",
            TicketStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "completed" => Some(TicketStatus::Completed),
            "cancelled" => Some(TicketStatus::Cancelled),
            _ => None,
        }
    }

    /// `completed` and `cancelled` accept no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Completed | TicketStatus::Cancelled)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority, stored as its 1-3 ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn ordinal(&self) -> i16 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Option<Self> {
        match value {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            _ => None,
        }
    }
}

/// A maintenance ticket row as stored.
///
/// Invariants: `tenant_id` is set at creation and never changes; `status`
/// moves only along the lifecycle in `domain::lifecycle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: Uuid,
    pub unit_id: Uuid,
    /// Creating tenant, immutable after creation.
    pub tenant_id: Uuid,
    /// Assigned technician, if any.
    pub technician_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    /// Free-form category tag ("Plumbing", "Electrical", ...).
    pub category: String,
    pub priority: Priority,
    pub status: TicketStatus,
    /// Image URLs, opaque to this service.
    pub images: Vec<String>,
    /// Progress notes added by landlord/technician updates.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized property context carried on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

/// Denormalized unit context carried on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRef {
    pub id: Uuid,
    pub unit_number: String,
    pub property: PropertyRef,
}

/// Denormalized profile contact context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRef {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

/// A ticket with its fixed join shape fully resolved.
///
/// The gateway never hands out a ticket without this context, so callers
/// cannot observe a half-hydrated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketView {
    pub ticket: Ticket,
    pub unit: UnitRef,
    pub tenant: ProfileRef,
    pub technician: Option<ProfileRef>,
}

/// Fields a caller supplies when opening a ticket. There is deliberately no
/// tenant or status field here: both come from the authenticated actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub unit_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub images: Vec<String>,
}

/// Partial update applied by `update_ticket`. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub status: Option<TicketStatus>,
    pub notes: Option<String>,
    pub technician_id: Option<Uuid>,
    pub images: Option<Vec<String>>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.notes.is_none()
            && self.technician_id.is_none()
            && self.images.is_none()
    }
}

/// Lease state between a tenant profile and a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseStatus {
    Active,
    Ended,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "active",
            LeaseStatus::Ended => "ended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(LeaseStatus::Active),
            "ended" => Some(LeaseStatus::Ended),
            _ => None,
        }
    }
}

/// A unit leased by a tenant, with its property context resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeasedUnit {
    pub id: Uuid,
    pub unit_number: String,
    pub property: PropertyRef,
}
