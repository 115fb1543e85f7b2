//! Contract layer - transport-agnostic models and errors
//!
//! Everything here is shared between the domain service, the storage layer
//! and the REST surface without carrying serde or HTTP concerns.

pub mod error;
pub mod model;

pub use error::MaintenanceError;
pub use model::{
    Actor, LeaseStatus, LeasedUnit, Priority, ProfileRef, PropertyRef, Role, Ticket, TicketDraft,
    TicketPatch, TicketStatus, TicketView, UnitRef,
};
