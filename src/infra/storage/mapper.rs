//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Enum-ish
//! columns (status, priority, images) are validated here at the store
//! boundary instead of being duck-typed through.

use super::entity;
use crate::contract::{Priority, ProfileRef, PropertyRef, Ticket, TicketStatus, UnitRef};
use anyhow::{anyhow, Context};

// ===== Ticket Conversions =====

impl TryFrom<entity::ticket::Model> for Ticket {
    type Error = anyhow::Error;

    fn try_from(entity: entity::ticket::Model) -> Result<Self, Self::Error> {
        let status = TicketStatus::parse(&entity.status)
            .ok_or_else(|| anyhow!("ticket {} has unknown status '{}'", entity.id, entity.status))?;
        let priority = Priority::from_ordinal(entity.priority).ok_or_else(|| {
            anyhow!(
                "ticket {} has priority {} outside 1-3",
                entity.id,
                entity.priority
            )
        })?;
        let images = match entity.images {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("ticket {} images are not a string array", entity.id))?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            unit_id: entity.unit_id,
            tenant_id: entity.tenant_id,
            technician_id: entity.technician_id,
            title: entity.title,
            description: entity.description,
            category: entity.category,
            priority,
            status,
            images,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&Ticket> for entity::ticket::ActiveModel {
    fn from(model: &Ticket) -> Self {
        use sea_orm::ActiveValue::*;

        let images = if model.images.is_empty() {
            None
        } else {
            Some(serde_json::json!(model.images))
        };

        Self {
            id: Set(model.id),
            unit_id: Set(model.unit_id),
            tenant_id: Set(model.tenant_id),
            technician_id: Set(model.technician_id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            category: Set(model.category.clone()),
            priority: Set(model.priority.ordinal()),
            status: Set(model.status.as_str().to_owned()),
            images: Set(images),
            notes: Set(model.notes.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Join-shape Conversions =====

impl From<entity::property::Model> for PropertyRef {
    fn from(entity: entity::property::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }
}

impl From<entity::profile::Model> for ProfileRef {
    fn from(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
        }
    }
}

/// Assemble the unit side of the join shape.
pub fn unit_ref(unit: entity::unit::Model, property: entity::property::Model) -> UnitRef {
    UnitRef {
        id: unit.id,
        unit_number: unit.unit_number,
        property: property.into(),
    }
}
