//! SeaORM repository implementations
//!
//! The ticket repository translates [`TicketScope`] into SQL restrictions
//! and re-hydrates the fixed join shape (unit -> property, tenant profile,
//! technician profile) on every read.

use crate::contract::{LeaseStatus, LeasedUnit, ProfileRef, Ticket, TicketPatch, TicketView};
use crate::domain::access::TicketScope;
use crate::domain::repository::{LeaseRepository, TicketRepository};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::{entity, mapper};

// ===== Ticket Repository =====

pub struct SeaOrmTicketRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTicketRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolve unit/property/profile context for a batch of ticket rows.
    async fn hydrate(&self, rows: Vec<entity::ticket::Model>) -> Result<Vec<TicketView>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let unit_ids: Vec<Uuid> = rows.iter().map(|r| r.unit_id).collect();
        let units: HashMap<Uuid, entity::unit::Model> = entity::unit::Entity::find()
            .filter(entity::unit::Column::Id.is_in(unit_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let property_ids: Vec<Uuid> = units.values().map(|u| u.property_id).collect();
        let properties: HashMap<Uuid, entity::property::Model> = entity::property::Entity::find()
            .filter(entity::property::Column::Id.is_in(property_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut profile_ids: Vec<Uuid> = rows.iter().map(|r| r.tenant_id).collect();
        profile_ids.extend(rows.iter().filter_map(|r| r.technician_id));
        let profiles: HashMap<Uuid, entity::profile::Model> = entity::profile::Entity::find()
            .filter(entity::profile::Column::Id.is_in(profile_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut views = Vec::with_capacity(rows.len());
        for row in rows {
            let ticket = Ticket::try_from(row)?;
            let unit = units
                .get(&ticket.unit_id)
                .ok_or_else(|| anyhow!("ticket {} references missing unit {}", ticket.id, ticket.unit_id))?
                .clone();
            let property = properties
                .get(&unit.property_id)
                .ok_or_else(|| anyhow!("unit {} references missing property {}", unit.id, unit.property_id))?
                .clone();
            let tenant: ProfileRef = profiles
                .get(&ticket.tenant_id)
                .ok_or_else(|| anyhow!("ticket {} references missing tenant {}", ticket.id, ticket.tenant_id))?
                .clone()
                .into();
            let technician = match ticket.technician_id {
                Some(id) => Some(
                    profiles
                        .get(&id)
                        .ok_or_else(|| anyhow!("ticket {} references missing technician {}", ticket.id, id))?
                        .clone()
                        .into(),
                ),
                None => None,
            };

            views.push(TicketView {
                unit: mapper::unit_ref(unit, property),
                tenant,
                technician,
                ticket,
            });
        }

        Ok(views)
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<()> {
        let active: entity::ticket::ActiveModel = ticket.into();
        entity::ticket::Entity::insert(active).exec(&*self.db).await?;
        Ok(())
    }

    async fn find_view(&self, id: Uuid) -> Result<Option<TicketView>> {
        let row = entity::ticket::Entity::find_by_id(id).one(&*self.db).await?;
        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn find_with_owner(&self, id: Uuid) -> Result<Option<(Ticket, Uuid)>> {
        let Some(row) = entity::ticket::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        let unit = entity::unit::Entity::find_by_id(row.unit_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| anyhow!("ticket {} references missing unit {}", row.id, row.unit_id))?;
        let property = entity::property::Entity::find_by_id(unit.property_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| anyhow!("unit {} references missing property {}", unit.id, unit.property_id))?;

        Ok(Some((Ticket::try_from(row)?, property.landlord_id)))
    }

    async fn list_views(&self, scope: &TicketScope) -> Result<Vec<TicketView>> {
        let query = entity::ticket::Entity::find();
        let query = match scope {
            // Fail closed without touching the store.
            TicketScope::DenyAll => return Ok(Vec::new()),
            TicketScope::TenantOwn(id) => {
                query.filter(entity::ticket::Column::TenantId.eq(*id))
            }
            TicketScope::TechnicianAssigned(id) => {
                query.filter(entity::ticket::Column::TechnicianId.eq(*id))
            }
            TicketScope::LandlordOwned(id) => query
                .join(JoinType::InnerJoin, entity::ticket::Relation::Unit.def())
                .join(JoinType::InnerJoin, entity::unit::Relation::Property.def())
                .filter(entity::property::Column::LandlordId.eq(*id)),
            TicketScope::Unrestricted => query,
        };

        let rows = query
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        self.hydrate(rows).await
    }

    async fn apply_patch(&self, id: Uuid, patch: &TicketPatch) -> Result<bool> {
        let Some(row) = entity::ticket::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(false);
        };

        let mut active = row.into_active_model();
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_owned());
        }
        if let Some(notes) = &patch.notes {
            active.notes = Set(Some(notes.clone()));
        }
        if let Some(technician_id) = patch.technician_id {
            active.technician_id = Set(Some(technician_id));
        }
        if let Some(images) = &patch.images {
            active.images = Set(Some(serde_json::json!(images)));
        }
        active.updated_at = Set(chrono::Utc::now());

        active.update(&*self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = entity::ticket::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Lease Repository =====

pub struct SeaOrmLeaseRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmLeaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeaseRepository for SeaOrmLeaseRepository {
    async fn unit_exists(&self, unit_id: Uuid) -> Result<bool> {
        let count = entity::unit::Entity::find_by_id(unit_id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }

    async fn units_for_tenant(
        &self,
        tenant_id: Uuid,
        status: LeaseStatus,
    ) -> Result<Vec<LeasedUnit>> {
        let leases = entity::lease::Entity::find()
            .filter(entity::lease::Column::TenantId.eq(tenant_id))
            .filter(entity::lease::Column::Status.eq(status.as_str()))
            .all(&*self.db)
            .await?;
        if leases.is_empty() {
            return Ok(Vec::new());
        }

        let unit_ids: Vec<Uuid> = leases.iter().map(|l| l.unit_id).collect();
        let units = entity::unit::Entity::find()
            .filter(entity::unit::Column::Id.is_in(unit_ids))
            .order_by_asc(entity::unit::Column::UnitNumber)
            .all(&*self.db)
            .await?;

        let property_ids: Vec<Uuid> = units.iter().map(|u| u.property_id).collect();
        let properties: HashMap<Uuid, entity::property::Model> = entity::property::Entity::find()
            .filter(entity::property::Column::Id.is_in(property_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut result = Vec::with_capacity(units.len());
        for unit in units {
            let property = properties
                .get(&unit.property_id)
                .ok_or_else(|| anyhow!("unit {} references missing property {}", unit.id, unit.property_id))?
                .clone();
            result.push(LeasedUnit {
                id: unit.id,
                unit_number: unit.unit_number,
                property: property.into(),
            });
        }

        Ok(result)
    }
}
