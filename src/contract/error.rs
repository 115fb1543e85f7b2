//! Contract error types for the property management service
//!
//! These errors are transport-agnostic; the REST layer maps them onto HTTP
//! status codes in `api::rest::error`.

/// Maintenance domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceError {
    /// Entity absent (ticket, unit, ...)
    NotFound {
        /// Resource type (ticket, unit)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Malformed or missing required input
    Validation {
        /// Validation error message
        message: String,
    },
    /// Illegal lifecycle move, including status values outside the enum
    InvalidTransition {
        /// Human-readable transition description ("completed -> cancelled")
        detail: String,
    },
    /// Actor lacks the role or ownership required for the operation
    Unauthorized {
        /// Denial reason
        reason: String,
    },
    /// Underlying persistence failure, original message carried through
    Store {
        /// Store error message
        message: String,
    },
}

impl MaintenanceError {
    pub fn not_found(resource: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::InvalidTransition {
            detail: detail.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for MaintenanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::InvalidTransition { detail } => {
                write!(f, "Invalid ticket transition: {}", detail)
            }
            Self::Unauthorized { reason } => {
                write!(f, "Unauthorized: {}", reason)
            }
            Self::Store { message } => {
                write!(f, "Store error: {}", message)
            }
        }
    }
}

impl std::error::Error for MaintenanceError {}
