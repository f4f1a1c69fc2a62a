use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000002_create_maintenance_team_table::MaintenanceTeam,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string(Equipment::Name))
                    .col(string_null(Equipment::SerialNumber))
                    .col(string_null(Equipment::Department))
                    .col(integer_null(Equipment::AssignedEmployeeId))
                    .col(date_null(Equipment::PurchaseDate))
                    .col(date_null(Equipment::WarrantyExpiry))
                    .col(string_null(Equipment::Location))
                    .col(integer_null(Equipment::MaintenanceTeamId))
                    .col(integer_null(Equipment::DefaultTechnicianId))
                    .col(string(Equipment::Status))
                    .col(
                        timestamp(Equipment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Equipment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_assigned_employee_id")
                            .from(Equipment::Table, Equipment::AssignedEmployeeId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_maintenance_team_id")
                            .from(Equipment::Table, Equipment::MaintenanceTeamId)
                            .to(MaintenanceTeam::Table, MaintenanceTeam::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_default_technician_id")
                            .from(Equipment::Table, Equipment::DefaultTechnicianId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Serial numbers are optional but must be unique when present.
        manager
            .create_index(
                Index::create()
                    .name("idx_equipment_serial_number")
                    .table(Equipment::Table)
                    .col(Equipment::SerialNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    Name,
    SerialNumber,
    Department,
    AssignedEmployeeId,
    PurchaseDate,
    WarrantyExpiry,
    Location,
    MaintenanceTeamId,
    DefaultTechnicianId,
    Status,
    CreatedAt,
    UpdatedAt,
}
