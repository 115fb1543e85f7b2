//! Actor identity extraction from request headers
//!
//! Identity is resolved upstream (gateway/auth proxy) and forwarded as
//! trusted headers. Requests without both headers are rejected with 401.
//! A role value outside the known set is kept as `None` so reads fail
//! closed (empty visibility) and writes are refused.

use crate::contract::{Actor, Role};
use crate::domain::TicketScope;
use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use uuid::Uuid;

use super::error::Problem;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Authenticated caller identity as forwarded by the auth layer.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub id: Uuid,
    /// `None` when the forwarded role string is not a known role.
    pub role: Option<Role>,
}

impl Identity {
    /// Ticket visibility for this caller. Unknown roles see nothing.
    pub fn scope(&self) -> TicketScope {
        match self.role {
            Some(role) => TicketScope::for_actor(&Actor::new(self.id, role)),
            None => TicketScope::DenyAll,
        }
    }

    /// Typed actor for operations that require a known role.
    pub fn actor(&self) -> Result<Actor, Problem> {
        match self.role {
            Some(role) => Ok(Actor::new(self.id, role)),
            None => Err(Problem::new(StatusCode::FORBIDDEN, "Forbidden")
                .with_detail("actor role is not recognized")),
        }
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let unauthenticated = || {
            Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized")
                .with_detail("missing or malformed actor identity headers")
        };

        let id = parts
            .headers
            .get(ACTOR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or_else(unauthenticated)?;

        let role = parts
            .headers
            .get(ACTOR_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthenticated)?;

        Ok(Identity {
            id,
            role: Role::parse(role),
        })
    }
}
