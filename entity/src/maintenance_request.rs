use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    #[sea_orm(string_value = "CORRECTIVE")]
    Corrective,
    #[sea_orm(string_value = "PREVENTIVE")]
    Preventive,
}

/// Workflow states. NEW -> IN_PROGRESS -> REPAIRED is the normal path;
/// NEW or IN_PROGRESS -> SCRAP retires the equipment. REPAIRED and SCRAP
/// are terminal in the workflow sense but not guarded at the data layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "REPAIRED")]
    Repaired,
    #[sea_orm(string_value = "SCRAP")]
    Scrap,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: i32,
    pub auto_filled_team_id: Option<i32>,
    pub assigned_technician_id: Option<i32>,
    pub request_type: RequestType,
    pub scheduled_date: Option<Date>,
    pub duration_hours: Option<f64>,
    pub status: RequestStatus,
    pub scrap_reason: Option<String>,
    pub created_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Equipment,
    #[sea_orm(
        belongs_to = "super::maintenance_team::Entity",
        from = "Column::AutoFilledTeamId",
        to = "super::maintenance_team::Column::Id",
        on_delete = "SetNull"
    )]
    MaintenanceTeam,
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::maintenance_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
