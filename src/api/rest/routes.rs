//! Route registration for the maintenance and tenant-unit endpoints

use super::{dto::*, handlers, identity::Identity};
use crate::domain::Service;
use axum::{
    routing::{delete, get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the service router with all endpoints
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // Maintenance endpoints
        .route("/maintenance", get(list_tickets_handler))
        .route("/maintenance/tickets", post(create_ticket_handler))
        .route("/maintenance/tickets/{id}", get(get_ticket_handler))
        .route("/maintenance/tickets/{id}", patch(update_ticket_handler))
        .route("/maintenance/tickets/{id}", delete(delete_ticket_handler))
        // Tenant endpoints
        .route("/tenants/units", get(list_tenant_units_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_tickets_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
) -> Result<axum::Json<TicketListResponse>, super::error::Problem> {
    handlers::list_tickets(service, identity).await
}

async fn get_ticket_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::Json<TicketDto>, super::error::Problem> {
    handlers::get_ticket(service, identity, path).await
}

async fn create_ticket_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
    json: axum::Json<CreateTicketRequest>,
) -> Result<(axum::http::StatusCode, axum::Json<TicketDto>), super::error::Problem> {
    handlers::create_ticket(service, identity, json).await
}

async fn update_ticket_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
    path: axum::extract::Path<uuid::Uuid>,
    json: axum::Json<UpdateTicketRequest>,
) -> Result<axum::Json<TicketDto>, super::error::Problem> {
    handlers::update_ticket(service, identity, path, json).await
}

async fn delete_ticket_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, super::error::Problem> {
    handlers::delete_ticket(service, identity, path).await
}

async fn list_tenant_units_handler(
    Extension(service): Extension<Arc<Service>>,
    identity: Identity,
    query: axum::extract::Query<handlers::LeasedUnitsQuery>,
) -> Result<axum::Json<LeasedUnitsResponse>, super::error::Problem> {
    handlers::list_tenant_units(service, identity, query).await
}
