//! Equipment factory for creating test equipment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::equipment::EquipmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test equipment with customizable fields.
///
/// Defaults produce an ACTIVE unit with a unique name and serial number and
/// no team or default technician.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    serial_number: Option<String>,
    department: Option<String>,
    location: Option<String>,
    maintenance_team_id: Option<i32>,
    default_technician_id: Option<i32>,
    status: EquipmentStatus,
}

impl<'a> EquipmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Equipment {}", id),
            serial_number: Some(format!("SN-{:05}", id)),
            department: None,
            location: None,
            maintenance_team_id: None,
            default_technician_id: None,
            status: EquipmentStatus::Active,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn serial_number(mut self, serial_number: Option<String>) -> Self {
        self.serial_number = serial_number;
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn maintenance_team_id(mut self, team_id: i32) -> Self {
        self.maintenance_team_id = Some(team_id);
        self
    }

    pub fn default_technician_id(mut self, technician_id: i32) -> Self {
        self.default_technician_id = Some(technician_id);
        self
    }

    pub fn status(mut self, status: EquipmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the equipment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::equipment::Model)` - Created equipment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            name: ActiveValue::Set(self.name),
            serial_number: ActiveValue::Set(self.serial_number),
            department: ActiveValue::Set(self.department),
            location: ActiveValue::Set(self.location),
            maintenance_team_id: ActiveValue::Set(self.maintenance_team_id),
            default_technician_id: ActiveValue::Set(self.default_technician_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates equipment with default values.
pub async fn create_equipment(db: &DatabaseConnection) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db).build().await
}
