//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod mapper;
pub mod routes;

pub use routes::router;
