//! Database migrations for the property management service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_profiles::Migration),
            Box::new(m20250301_000002_create_properties::Migration),
            Box::new(m20250301_000003_create_units::Migration),
            Box::new(m20250301_000004_create_leases::Migration),
            Box::new(m20250301_000005_create_tickets::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Role,
    FullName,
    Email,
    Phone,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    LandlordId,
    Name,
    Address,
    City,
    State,
    Zip,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
    PropertyId,
    UnitNumber,
    RentAmount,
    Bedrooms,
    Bathrooms,
}

#[derive(DeriveIden)]
enum Leases {
    Table,
    Id,
    UnitId,
    TenantId,
    Status,
    StartDate,
    EndDate,
    RentAmount,
    SecurityDeposit,
}

#[derive(DeriveIden)]
enum MaintenanceTickets {
    Table,
    Id,
    UnitId,
    TenantId,
    TechnicianId,
    Title,
    Description,
    Category,
    Priority,
    Status,
    Images,
    Notes,
}

fn timestamps(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Alias::new("updated_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
}

mod m20250301_000001_create_profiles {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(Profiles::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Profiles::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Profiles::Role).string().not_null())
                .col(ColumnDef::new(Profiles::FullName).string().not_null())
                .col(ColumnDef::new(Profiles::Email).string().not_null())
                .col(ColumnDef::new(Profiles::Phone).string());
            timestamps(&mut table);
            manager.create_table(table.to_owned()).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Profiles::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000002_create_properties {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(Properties::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Properties::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Properties::LandlordId).uuid().not_null())
                .col(ColumnDef::new(Properties::Name).string().not_null())
                .col(ColumnDef::new(Properties::Address).string().not_null())
                .col(ColumnDef::new(Properties::City).string().not_null())
                .col(ColumnDef::new(Properties::State).string().not_null())
                .col(ColumnDef::new(Properties::Zip).string().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_properties_landlord")
                        .from(Properties::Table, Properties::LandlordId)
                        .to(Profiles::Table, Profiles::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                );
            timestamps(&mut table);
            manager.create_table(table.to_owned()).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_properties_landlord_id")
                        .table(Properties::Table)
                        .col(Properties::LandlordId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Properties::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000003_create_units {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(Units::Table)
                .if_not_exists()
                .col(ColumnDef::new(Units::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Units::PropertyId).uuid().not_null())
                .col(ColumnDef::new(Units::UnitNumber).string().not_null())
                .col(ColumnDef::new(Units::RentAmount).double().not_null())
                .col(ColumnDef::new(Units::Bedrooms).integer())
                .col(ColumnDef::new(Units::Bathrooms).double())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_units_property")
                        .from(Units::Table, Units::PropertyId)
                        .to(Properties::Table, Properties::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                );
            timestamps(&mut table);
            manager.create_table(table.to_owned()).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_units_property_id")
                        .table(Units::Table)
                        .col(Units::PropertyId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Units::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000004_create_leases {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(Leases::Table)
                .if_not_exists()
                .col(ColumnDef::new(Leases::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Leases::UnitId).uuid().not_null())
                .col(ColumnDef::new(Leases::TenantId).uuid().not_null())
                .col(ColumnDef::new(Leases::Status).string().not_null())
                .col(ColumnDef::new(Leases::StartDate).date().not_null())
                .col(ColumnDef::new(Leases::EndDate).date().not_null())
                .col(ColumnDef::new(Leases::RentAmount).double().not_null())
                .col(
                    ColumnDef::new(Leases::SecurityDeposit)
                        .double()
                        .not_null()
                        .default(0.0),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_leases_unit")
                        .from(Leases::Table, Leases::UnitId)
                        .to(Units::Table, Units::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_leases_tenant")
                        .from(Leases::Table, Leases::TenantId)
                        .to(Profiles::Table, Profiles::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                );
            timestamps(&mut table);
            manager.create_table(table.to_owned()).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_leases_tenant_status")
                        .table(Leases::Table)
                        .col(Leases::TenantId)
                        .col(Leases::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Leases::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000005_create_tickets {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(MaintenanceTickets::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(MaintenanceTickets::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(MaintenanceTickets::UnitId).uuid().not_null())
                .col(ColumnDef::new(MaintenanceTickets::TenantId).uuid().not_null())
                .col(ColumnDef::new(MaintenanceTickets::TechnicianId).uuid())
                .col(ColumnDef::new(MaintenanceTickets::Title).string().not_null())
                .col(ColumnDef::new(MaintenanceTickets::Description).text().not_null())
                .col(ColumnDef::new(MaintenanceTickets::Category).string().not_null())
                .col(
                    ColumnDef::new(MaintenanceTickets::Priority)
                        .small_integer()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(MaintenanceTickets::Status)
                        .string()
                        .not_null()
                        .default("open"),
                )
                .col(ColumnDef::new(MaintenanceTickets::Images).json())
                .col(ColumnDef::new(MaintenanceTickets::Notes).string())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_tickets_unit")
                        .from(MaintenanceTickets::Table, MaintenanceTickets::UnitId)
                        .to(Units::Table, Units::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_tickets_tenant")
                        .from(MaintenanceTickets::Table, MaintenanceTickets::TenantId)
                        .to(Profiles::Table, Profiles::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_tickets_technician")
                        .from(MaintenanceTickets::Table, MaintenanceTickets::TechnicianId)
                        .to(Profiles::Table, Profiles::Id)
                        .on_delete(ForeignKeyAction::SetNull),
                );
            timestamps(&mut table);
            manager.create_table(table.to_owned()).await?;

            for (name, column) in [
                ("idx_tickets_tenant_id", MaintenanceTickets::TenantId),
                ("idx_tickets_technician_id", MaintenanceTickets::TechnicianId),
                ("idx_tickets_unit_id", MaintenanceTickets::UnitId),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .name(name)
                            .table(MaintenanceTickets::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaintenanceTickets::Table).to_owned())
                .await
        }
    }
}
