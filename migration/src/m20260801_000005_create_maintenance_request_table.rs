use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000002_create_maintenance_team_table::MaintenanceTeam,
    m20260801_000004_create_equipment_table::Equipment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequest::Id))
                    .col(string(MaintenanceRequest::Subject))
                    .col(text_null(MaintenanceRequest::Description))
                    .col(integer(MaintenanceRequest::EquipmentId))
                    .col(integer_null(MaintenanceRequest::AutoFilledTeamId))
                    .col(integer_null(MaintenanceRequest::AssignedTechnicianId))
                    .col(string(MaintenanceRequest::RequestType))
                    .col(date_null(MaintenanceRequest::ScheduledDate))
                    .col(double_null(MaintenanceRequest::DurationHours))
                    .col(string(MaintenanceRequest::Status))
                    .col(text_null(MaintenanceRequest::ScrapReason))
                    .col(integer_null(MaintenanceRequest::CreatedById))
                    .col(
                        timestamp(MaintenanceRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(MaintenanceRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_request_equipment_id")
                            .from(MaintenanceRequest::Table, MaintenanceRequest::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_request_auto_filled_team_id")
                            .from(
                                MaintenanceRequest::Table,
                                MaintenanceRequest::AutoFilledTeamId,
                            )
                            .to(MaintenanceTeam::Table, MaintenanceTeam::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_request_assigned_technician_id")
                            .from(
                                MaintenanceRequest::Table,
                                MaintenanceRequest::AssignedTechnicianId,
                            )
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_request_created_by_id")
                            .from(MaintenanceRequest::Table, MaintenanceRequest::CreatedById)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRequest {
    #[sea_orm(iden = "maintenance_requests")]
    Table,
    Id,
    Subject,
    Description,
    EquipmentId,
    AutoFilledTeamId,
    AssignedTechnicianId,
    RequestType,
    ScheduledDate,
    DurationHours,
    Status,
    ScrapReason,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}
