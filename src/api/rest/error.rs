//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::MaintenanceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
///
/// Store failures never leak their message to the client; the original
/// error goes to the log instead.
pub fn map_domain_error(error: MaintenanceError) -> Problem {
    match error {
        MaintenanceError::NotFound { resource, id } => Problem::new(
            StatusCode::NOT_FOUND,
            format!("{} Not Found", capitalize(&resource)),
        )
        .with_detail(format!("{} with id '{}' was not found", resource, id)),

        MaintenanceError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        MaintenanceError::InvalidTransition { detail } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Ticket Transition").with_detail(detail)
        }

        MaintenanceError::Unauthorized { reason } => {
            Problem::new(StatusCode::FORBIDDEN, "Forbidden").with_detail(reason)
        }

        MaintenanceError::Store { message } => {
            tracing::error!(error = %message, "store error");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
