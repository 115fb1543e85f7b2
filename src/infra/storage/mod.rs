//! Storage infrastructure for the property management service

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use migrations::Migrator;
pub use repositories::{SeaOrmLeaseRepository, SeaOrmTicketRepository};
