//! Common test utilities: a realistic property portfolio and an in-memory
//! store implementing the repository traits.

use async_trait::async_trait;
use parking_lot::RwLock;
use property_service::contract::{
    LeaseStatus, LeasedUnit, ProfileRef, PropertyRef, Ticket, TicketPatch, TicketView, UnitRef,
};
use property_service::domain::{LeaseRepository, TicketRepository, TicketScope};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Realistic portfolio for testing
/// Two landlords, two properties, three units, two tenants, one technician
#[derive(Debug, Clone)]
pub struct TestPortfolio {
    pub landlord_anna: Uuid,
    pub landlord_omar: Uuid,
    pub tenant_maria: Uuid,
    pub tenant_james: Uuid,
    pub technician_raj: Uuid,
    pub admin: Uuid,
    pub property_maple: Uuid,
    pub property_birch: Uuid,
    /// Maple Court 1A, leased (active) by Maria
    pub unit_1a: Uuid,
    /// Maple Court 2B, leased (active) by James
    pub unit_2b: Uuid,
    /// Birch Row 3C, previously leased (ended) by Maria
    pub unit_3c: Uuid,
}

impl TestPortfolio {
    /// Create a new portfolio with fresh UUIDs
    pub fn new() -> Self {
        Self {
            landlord_anna: Uuid::new_v4(),
            landlord_omar: Uuid::new_v4(),
            tenant_maria: Uuid::new_v4(),
            tenant_james: Uuid::new_v4(),
            technician_raj: Uuid::new_v4(),
            admin: Uuid::new_v4(),
            property_maple: Uuid::new_v4(),
            property_birch: Uuid::new_v4(),
            unit_1a: Uuid::new_v4(),
            unit_2b: Uuid::new_v4(),
            unit_3c: Uuid::new_v4(),
        }
    }

    /// Print the portfolio structure
    pub fn print_structure(&self) {
        println!("\n📊 Portfolio Structure:");
        println!("   Landlord Anna: {}", self.landlord_anna);
        println!("   └─ Maple Court: {}", self.property_maple);
        println!("      ├─ Unit 1A (Maria, active lease): {}", self.unit_1a);
        println!("      └─ Unit 2B (James, active lease): {}", self.unit_2b);
        println!("   Landlord Omar: {}", self.landlord_omar);
        println!("   └─ Birch Row: {}", self.property_birch);
        println!("      └─ Unit 3C (Maria, ended lease): {}", self.unit_3c);
        println!("   Technician Raj: {}", self.technician_raj);
        println!("   Admin: {}", self.admin);
    }
}

impl Default for TestPortfolio {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store implementing both repository traits.
///
/// Visibility filtering goes through `TicketScope::permits`, the same
/// predicate the SQL translation in the real repository must agree with.
pub struct MockStore {
    profiles: RwLock<HashMap<Uuid, ProfileRef>>,
    units: RwLock<HashMap<Uuid, UnitRef>>,
    /// property id -> owning landlord
    landlords: RwLock<HashMap<Uuid, Uuid>>,
    /// (tenant, unit, status)
    leases: RwLock<Vec<(Uuid, Uuid, LeaseStatus)>>,
    tickets: RwLock<HashMap<Uuid, Ticket>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            units: RwLock::new(HashMap::new()),
            landlords: RwLock::new(HashMap::new()),
            leases: RwLock::new(Vec::new()),
            tickets: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-populated with the portfolio's world.
    pub fn seeded(p: &TestPortfolio) -> Arc<Self> {
        let store = Self::new();
        store.register_profile(p.landlord_anna, "Anna Keller", "anna@example.com");
        store.register_profile(p.landlord_omar, "Omar Haddad", "omar@example.com");
        store.register_profile(p.tenant_maria, "Maria Lopez", "maria@example.com");
        store.register_profile(p.tenant_james, "James Wright", "james@example.com");
        store.register_profile(p.technician_raj, "Raj Patel", "raj@example.com");
        store.register_profile(p.admin, "Site Admin", "admin@example.com");

        store.register_unit(
            p.unit_1a,
            "1A",
            p.property_maple,
            "Maple Court",
            "12 Maple St",
            p.landlord_anna,
        );
        store.register_unit(
            p.unit_2b,
            "2B",
            p.property_maple,
            "Maple Court",
            "12 Maple St",
            p.landlord_anna,
        );
        store.register_unit(
            p.unit_3c,
            "3C",
            p.property_birch,
            "Birch Row",
            "7 Birch Ave",
            p.landlord_omar,
        );

        store.register_lease(p.tenant_maria, p.unit_1a, LeaseStatus::Active);
        store.register_lease(p.tenant_james, p.unit_2b, LeaseStatus::Active);
        store.register_lease(p.tenant_maria, p.unit_3c, LeaseStatus::Ended);

        Arc::new(store)
    }

    pub fn register_profile(&self, id: Uuid, full_name: &str, email: &str) {
        self.profiles.write().insert(
            id,
            ProfileRef {
                id,
                full_name: full_name.to_string(),
                email: email.to_string(),
            },
        );
    }

    pub fn register_unit(
        &self,
        unit_id: Uuid,
        unit_number: &str,
        property_id: Uuid,
        property_name: &str,
        address: &str,
        landlord_id: Uuid,
    ) {
        self.units.write().insert(
            unit_id,
            UnitRef {
                id: unit_id,
                unit_number: unit_number.to_string(),
                property: PropertyRef {
                    id: property_id,
                    name: property_name.to_string(),
                    address: address.to_string(),
                },
            },
        );
        self.landlords.write().insert(property_id, landlord_id);
    }

    pub fn register_lease(&self, tenant_id: Uuid, unit_id: Uuid, status: LeaseStatus) {
        self.leases.write().push((tenant_id, unit_id, status));
    }

    /// Get count of stored tickets
    pub fn count(&self) -> usize {
        self.tickets.read().len()
    }

    /// Print verbose information about stored tickets
    pub fn print_state(&self, context: &str) {
        let tickets = self.tickets.read();
        println!("\n========== Ticket Store State: {} ==========", context);
        println!("Total tickets: {}", tickets.len());

        if tickets.is_empty() {
            println!("  (empty)");
        } else {
            for ticket in tickets.values() {
                println!("\n  Ticket: {}", ticket.id);
                println!("    Title: {}", ticket.title);
                println!("    Status: {}", ticket.status);
                println!("    Tenant: {}", ticket.tenant_id);
                println!("    Technician: {:?}", ticket.technician_id);
                println!("    Unit: {}", ticket.unit_id);
                println!("    Notes: {:?}", ticket.notes);
            }
        }
        println!("====================================================\n");
    }

    fn landlord_of(&self, ticket: &Ticket) -> anyhow::Result<Uuid> {
        let units = self.units.read();
        let unit = units
            .get(&ticket.unit_id)
            .ok_or_else(|| anyhow::anyhow!("unknown unit {}", ticket.unit_id))?;
        self.landlords
            .read()
            .get(&unit.property.id)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown property {}", unit.property.id))
    }

    fn view(&self, ticket: Ticket) -> anyhow::Result<TicketView> {
        let units = self.units.read();
        let profiles = self.profiles.read();
        let unit = units
            .get(&ticket.unit_id)
            .ok_or_else(|| anyhow::anyhow!("unknown unit {}", ticket.unit_id))?
            .clone();
        let tenant = profiles
            .get(&ticket.tenant_id)
            .ok_or_else(|| anyhow::anyhow!("unknown tenant {}", ticket.tenant_id))?
            .clone();
        let technician = match ticket.technician_id {
            Some(id) => Some(
                profiles
                    .get(&id)
                    .ok_or_else(|| anyhow::anyhow!("unknown technician {}", id))?
                    .clone(),
            ),
            None => None,
        };
        Ok(TicketView {
            ticket,
            unit,
            tenant,
            technician,
        })
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketRepository for MockStore {
    async fn insert(&self, ticket: &Ticket) -> anyhow::Result<()> {
        self.tickets.write().insert(ticket.id, ticket.clone());
        Ok(())
    }

    async fn find_view(&self, id: Uuid) -> anyhow::Result<Option<TicketView>> {
        let ticket = self.tickets.read().get(&id).cloned();
        match ticket {
            Some(ticket) => Ok(Some(self.view(ticket)?)),
            None => Ok(None),
        }
    }

    async fn find_with_owner(&self, id: Uuid) -> anyhow::Result<Option<(Ticket, Uuid)>> {
        let ticket = self.tickets.read().get(&id).cloned();
        match ticket {
            Some(ticket) => {
                let landlord = self.landlord_of(&ticket)?;
                Ok(Some((ticket, landlord)))
            }
            None => Ok(None),
        }
    }

    async fn list_views(&self, scope: &TicketScope) -> anyhow::Result<Vec<TicketView>> {
        let tickets: Vec<Ticket> = self.tickets.read().values().cloned().collect();
        let mut visible = Vec::new();
        for ticket in tickets {
            let landlord = self.landlord_of(&ticket)?;
            if scope.permits(&ticket, landlord) {
                visible.push(ticket);
            }
        }
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        visible.into_iter().map(|t| self.view(t)).collect()
    }

    async fn apply_patch(&self, id: Uuid, patch: &TicketPatch) -> anyhow::Result<bool> {
        let mut tickets = self.tickets.write();
        let Some(ticket) = tickets.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        if let Some(notes) = &patch.notes {
            ticket.notes = Some(notes.clone());
        }
        if let Some(technician_id) = patch.technician_id {
            ticket.technician_id = Some(technician_id);
        }
        if let Some(images) = &patch.images {
            ticket.images = images.clone();
        }
        ticket.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.tickets.write().remove(&id).is_some())
    }
}

#[async_trait]
impl LeaseRepository for MockStore {
    async fn unit_exists(&self, unit_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.units.read().contains_key(&unit_id))
    }

    async fn units_for_tenant(
        &self,
        tenant_id: Uuid,
        status: LeaseStatus,
    ) -> anyhow::Result<Vec<LeasedUnit>> {
        let leases = self.leases.read();
        let units = self.units.read();
        let mut result = Vec::new();
        for (tenant, unit_id, lease_status) in leases.iter() {
            if *tenant != tenant_id || *lease_status != status {
                continue;
            }
            let unit = units
                .get(unit_id)
                .ok_or_else(|| anyhow::anyhow!("unknown unit {}", unit_id))?;
            result.push(LeasedUnit {
                id: unit.id,
                unit_number: unit.unit_number.clone(),
                property: unit.property.clone(),
            });
        }
        result.sort_by(|a, b| a.unit_number.cmp(&b.unit_number));
        Ok(result)
    }
}
