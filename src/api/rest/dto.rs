//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Ticket DTOs =====

/// Maintenance ticket response DTO with its resolved context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    /// Ticket ID
    pub id: Uuid,

    /// Unit the ticket was opened against
    pub unit_id: Uuid,

    /// Creating tenant
    pub tenant_id: Uuid,

    /// Assigned technician, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<Uuid>,

    /// Short summary
    #[schema(example = "Leaking kitchen faucet")]
    pub title: String,

    /// Full problem description
    pub description: String,

    /// Category tag
    #[schema(example = "Plumbing")]
    pub category: String,

    /// Priority ordinal, 1 (low) to 3 (high)
    #[schema(example = 2)]
    pub priority: i16,

    /// Lifecycle status
    #[schema(example = "open")]
    pub status: String,

    /// Image URLs
    pub images: Vec<String>,

    /// Progress notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Unit context, always present
    pub unit: UnitDto,

    /// Tenant contact, always present
    pub tenant: ProfileDto,

    /// Technician contact when assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<ProfileDto>,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Unit context DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnitDto {
    /// Unit ID
    pub id: Uuid,

    /// Human-readable unit number
    #[schema(example = "2B")]
    pub unit_number: String,

    /// Owning property
    pub property: PropertyDto,
}

/// Property context DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyDto {
    /// Property ID
    pub id: Uuid,

    /// Property name
    #[schema(example = "Maple Court")]
    pub name: String,

    /// Street address
    pub address: String,
}

/// Profile contact DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    /// Profile ID
    pub id: Uuid,

    /// Display name
    pub full_name: String,

    /// Contact email
    pub email: String,
}

/// Ticket creation request
///
/// There is no tenant or status field: the tenant comes from the
/// authenticated actor and new tickets always start open.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    /// Unit the problem is in
    pub unit_id: Uuid,

    /// Short summary
    pub title: String,

    /// Full problem description
    pub description: String,

    /// Category tag
    #[schema(example = "Plumbing")]
    pub category: String,

    /// Priority ordinal, 1 (low) to 3 (high), defaults to medium
    #[serde(default = "default_priority")]
    pub priority: i16,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_priority() -> i16 {
    2
}

/// Ticket partial update request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTicketRequest {
    /// New lifecycle status
    #[schema(example = "in_progress")]
    pub status: Option<String>,

    /// Progress notes
    pub notes: Option<String>,

    /// Technician to assign
    pub technician_id: Option<Uuid>,

    /// Replacement image URL list
    pub images: Option<Vec<String>>,
}

/// List of tickets visible to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TicketListResponse {
    /// Tickets, newest first
    pub items: Vec<TicketDto>,

    /// Total count
    pub total: usize,
}

// ===== Tenant Unit DTOs =====

/// A unit leased by the calling tenant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeasedUnitDto {
    /// Unit ID
    pub id: Uuid,

    /// Human-readable unit number
    #[schema(example = "2B")]
    pub unit_number: String,

    /// Owning property
    pub property: PropertyDto,
}

/// List of units leased by the calling tenant
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeasedUnitsResponse {
    /// Leased units
    pub items: Vec<LeasedUnitDto>,

    /// Total count
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs
