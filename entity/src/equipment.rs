use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Equipment lifecycle status. SCRAPPED is set as a side effect of a
/// maintenance request reaching SCRAP and is never reversed automatically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "SCRAPPED")]
    Scrapped,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub serial_number: Option<String>,
    pub department: Option<String>,
    pub assigned_employee_id: Option<i32>,
    pub purchase_date: Option<Date>,
    pub warranty_expiry: Option<Date>,
    pub location: Option<String>,
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    pub status: EquipmentStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintenance_team::Entity",
        from = "Column::MaintenanceTeamId",
        to = "super::maintenance_team::Column::Id",
        on_delete = "SetNull"
    )]
    MaintenanceTeam,
    #[sea_orm(has_many = "super::maintenance_request::Entity")]
    MaintenanceRequest,
}

impl Related<super::maintenance_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceTeam.def()
    }
}

impl Related<super::maintenance_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
