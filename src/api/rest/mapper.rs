//! Mapper implementations for converting between DTOs and contract models
//!
//! Request mappers validate enum-ish wire values (status, priority) here at
//! the HTTP boundary so the domain only ever sees typed values.

use super::dto::*;
use crate::contract::{
    LeasedUnit, MaintenanceError, Priority, ProfileRef, PropertyRef, TicketDraft, TicketPatch,
    TicketStatus, TicketView, UnitRef,
};

// ===== Response conversions =====

impl From<PropertyRef> for PropertyDto {
    fn from(property: PropertyRef) -> Self {
        Self {
            id: property.id,
            name: property.name,
            address: property.address,
        }
    }
}

impl From<UnitRef> for UnitDto {
    fn from(unit: UnitRef) -> Self {
        Self {
            id: unit.id,
            unit_number: unit.unit_number,
            property: unit.property.into(),
        }
    }
}

impl From<ProfileRef> for ProfileDto {
    fn from(profile: ProfileRef) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            email: profile.email,
        }
    }
}

impl From<TicketView> for TicketDto {
    fn from(view: TicketView) -> Self {
        let ticket = view.ticket;
        Self {
            id: ticket.id,
            unit_id: ticket.unit_id,
            tenant_id: ticket.tenant_id,
            technician_id: ticket.technician_id,
            title: ticket.title,
            description: ticket.description,
            category: ticket.category,
            priority: ticket.priority.ordinal(),
            status: ticket.status.to_string(),
            images: ticket.images,
            notes: ticket.notes,
            unit: view.unit.into(),
            tenant: view.tenant.into(),
            technician: view.technician.map(Into::into),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

impl From<LeasedUnit> for LeasedUnitDto {
    fn from(unit: LeasedUnit) -> Self {
        Self {
            id: unit.id,
            unit_number: unit.unit_number,
            property: unit.property.into(),
        }
    }
}

// ===== Request conversions =====

impl TryFrom<CreateTicketRequest> for TicketDraft {
    type Error = MaintenanceError;

    fn try_from(req: CreateTicketRequest) -> Result<Self, Self::Error> {
        let priority = Priority::from_ordinal(req.priority).ok_or_else(|| {
            MaintenanceError::validation(format!("priority {} is outside 1-3", req.priority))
        })?;

        Ok(Self {
            unit_id: req.unit_id,
            title: req.title,
            description: req.description,
            category: req.category,
            priority,
            images: req.images,
        })
    }
}

impl TryFrom<UpdateTicketRequest> for TicketPatch {
    type Error = MaintenanceError;

    fn try_from(req: UpdateTicketRequest) -> Result<Self, Self::Error> {
        let status = match req.status {
            Some(value) => Some(TicketStatus::parse(&value).ok_or_else(|| {
                MaintenanceError::invalid_transition(format!("unknown status '{}'", value))
            })?),
            None => None,
        };

        Ok(Self {
            status,
            notes: req.notes,
            technician_id: req.technician_id,
            images: req.images,
        })
    }
}
