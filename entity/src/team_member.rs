use sea_orm::entity::prelude::*;

/// Junction between a maintenance team and a technician user.
///
/// `(team_id, user_id)` is unique; `display_name` is an optional per-team
/// label for the member.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub user_id: i32,
    pub display_name: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintenance_team::Entity",
        from = "Column::TeamId",
        to = "super::maintenance_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MaintenanceTeam,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::maintenance_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceTeam.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
