//! SeaORM entities for database tables

/// Actor profiles (landlords, tenants, technicians, admins)
pub mod profile {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "profiles")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Role string, authoritative for access control
        pub role: String,

        pub full_name: String,

        pub email: String,

        pub phone: Option<String>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Properties owned by this profile (landlord role)
        #[sea_orm(has_many = "super::property::Entity")]
        Properties,
        /// Leases held by this profile (tenant role)
        #[sea_orm(has_many = "super::lease::Entity")]
        Leases,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Properties, each owned by exactly one landlord profile
pub mod property {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "properties")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Owning landlord profile
        pub landlord_id: Uuid,

        pub name: String,

        pub address: String,

        pub city: String,

        pub state: String,

        pub zip: String,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::profile::Entity",
            from = "Column::LandlordId",
            to = "super::profile::Column::Id"
        )]
        Landlord,
        #[sea_orm(has_many = "super::unit::Entity")]
        Units,
    }

    impl Related<super::profile::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Landlord.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Units, each belonging to exactly one property
pub mod unit {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "units")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub property_id: Uuid,

        /// Human-readable unit number ("2B")
        pub unit_number: String,

        pub rent_amount: f64,

        pub bedrooms: Option<i32>,

        pub bathrooms: Option<f64>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::property::Entity",
            from = "Column::PropertyId",
            to = "super::property::Column::Id"
        )]
        Property,
        #[sea_orm(has_many = "super::ticket::Entity")]
        Tickets,
        #[sea_orm(has_many = "super::lease::Entity")]
        Leases,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Property.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Leases linking a tenant profile to a unit
pub mod lease {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "leases")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub unit_id: Uuid,

        pub tenant_id: Uuid,

        /// Lease state (active, ended)
        pub status: String,

        pub start_date: Date,

        pub end_date: Date,

        pub rent_amount: f64,

        pub security_deposit: f64,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::unit::Entity",
            from = "Column::UnitId",
            to = "super::unit::Column::Id"
        )]
        Unit,
        #[sea_orm(
            belongs_to = "super::profile::Entity",
            from = "Column::TenantId",
            to = "super::profile::Column::Id"
        )]
        Tenant,
    }

    impl Related<super::unit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Unit.def()
        }
    }

    impl Related<super::profile::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Maintenance tickets
pub mod ticket {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "maintenance_tickets")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub unit_id: Uuid,

        /// Creating tenant, immutable after insert
        pub tenant_id: Uuid,

        /// Assigned technician, if any
        pub technician_id: Option<Uuid>,

        pub title: String,

        #[sea_orm(column_type = "Text")]
        pub description: String,

        pub category: String,

        /// Ordinal 1-3 (low/medium/high)
        pub priority: i16,

        /// Lifecycle status string (open, in_progress, completed, cancelled)
        pub status: String,

        /// Image URLs as a JSON array
        pub images: Option<Json>,

        pub notes: Option<String>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::unit::Entity",
            from = "Column::UnitId",
            to = "super::unit::Column::Id"
        )]
        Unit,
        #[sea_orm(
            belongs_to = "super::profile::Entity",
            from = "Column::TenantId",
            to = "super::profile::Column::Id"
        )]
        Tenant,
        #[sea_orm(
            belongs_to = "super::profile::Entity",
            from = "Column::TechnicianId",
            to = "super::profile::Column::Id"
        )]
        Technician,
    }

    impl Related<super::unit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Unit.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
