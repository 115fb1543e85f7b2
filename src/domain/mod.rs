//! Domain layer - business logic and services

pub mod access;
pub mod lifecycle;
pub mod repository;
pub mod service;
pub mod validation;

pub use access::TicketScope;
pub use repository::{LeaseRepository, TicketRepository};
pub use service::Service;
