//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    identity::Identity,
};
use crate::contract::{LeaseStatus, Role, TicketDraft, TicketPatch};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

// ===== Maintenance Handlers =====

/// List tickets visible to the caller under the role filter
pub async fn list_tickets(
    service: Arc<Service>,
    identity: Identity,
) -> Result<Json<TicketListResponse>, Problem> {
    let views = service
        .tickets(&identity.scope())
        .await
        .map_err(map_domain_error)?;

    let items: Vec<TicketDto> = views.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(TicketListResponse { items, total }))
}

/// Get one ticket, if the caller may see it
pub async fn get_ticket(
    service: Arc<Service>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Json<TicketDto>, Problem> {
    let actor = identity.actor()?;
    let view = service
        .ticket_for(&actor, id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(view.into()))
}

/// Open a ticket for the calling tenant
pub async fn create_ticket(
    service: Arc<Service>,
    identity: Identity,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketDto>), Problem> {
    let actor = identity.actor()?;
    let draft = TicketDraft::try_from(req).map_err(map_domain_error)?;
    let view = service
        .create_ticket(&actor, draft)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// Apply a partial update to a ticket
pub async fn update_ticket(
    service: Arc<Service>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTicketRequest>,
) -> Result<Json<TicketDto>, Problem> {
    let actor = identity.actor()?;
    let patch = TicketPatch::try_from(req).map_err(map_domain_error)?;
    let view = service
        .update_ticket(&actor, id, patch)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(view.into()))
}

/// Remove a ticket row (admin only)
pub async fn delete_ticket(
    service: Arc<Service>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    let actor = identity.actor()?;
    service
        .delete_ticket(&actor, id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Tenant Unit Handlers =====

/// Query parameters for listing a tenant's leased units
#[derive(Debug, Deserialize)]
pub struct LeasedUnitsQuery {
    /// Tenant whose leases to list
    pub tenant_id: Option<Uuid>,
    /// Lease state filter, defaults to active
    pub status: Option<String>,
}

/// List units a tenant holds a lease on. Callers may only query themselves
/// unless they are admins.
pub async fn list_tenant_units(
    service: Arc<Service>,
    identity: Identity,
    Query(query): Query<LeasedUnitsQuery>,
) -> Result<Json<LeasedUnitsResponse>, Problem> {
    let actor = identity.actor()?;
    let tenant_id = query.tenant_id.ok_or_else(|| {
        Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
            .with_detail("tenant_id is required")
    })?;
    if tenant_id != actor.id && actor.role != Role::Admin {
        return Err(Problem::new(StatusCode::FORBIDDEN, "Forbidden")
            .with_detail("callers may only list their own units"));
    }
    let status = match query.status.as_deref() {
        None => LeaseStatus::Active,
        Some(value) => LeaseStatus::parse(value).ok_or_else(|| {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
                .with_detail(format!("unknown lease status '{}'", value))
        })?,
    };

    let units = service
        .units_for_tenant(tenant_id, status)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<LeasedUnitDto> = units.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(LeasedUnitsResponse { items, total }))
}
