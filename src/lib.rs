//! Property Management Service
//!
//! Maintenance ticket lifecycle with role-scoped data access. Tenants open
//! tickets against their units, technicians work assigned tickets, landlords
//! see everything on their properties. All reads and writes flow through the
//! domain [`Service`](domain::Service) gateway, which applies the role filter
//! and lifecycle rules before touching the store.

// Public exports
pub mod contract;
pub use contract::{
    error::MaintenanceError, Actor, LeaseStatus, LeasedUnit, Priority, Role, Ticket, TicketDraft,
    TicketPatch, TicketStatus, TicketView,
};

pub mod domain;
pub use domain::{Service, TicketScope};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod infra;
