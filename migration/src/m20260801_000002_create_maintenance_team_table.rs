use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceTeam::Id))
                    .col(string_uniq(MaintenanceTeam::TeamName))
                    .col(
                        timestamp(MaintenanceTeam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(MaintenanceTeam::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceTeam {
    #[sea_orm(iden = "maintenance_teams")]
    Table,
    Id,
    TeamName,
    CreatedAt,
    UpdatedAt,
}
