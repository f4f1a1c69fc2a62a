//! Maintenance request factory.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::maintenance_request::{RequestStatus, RequestType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maintenance requests.
///
/// Defaults produce a CORRECTIVE request in NEW status with no team,
/// technician, or scheduled date. `equipment_id` is required.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    subject: String,
    equipment_id: i32,
    auto_filled_team_id: Option<i32>,
    assigned_technician_id: Option<i32>,
    request_type: RequestType,
    scheduled_date: Option<NaiveDate>,
    status: RequestStatus,
    created_by_id: Option<i32>,
}

impl<'a> RequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, equipment_id: i32) -> Self {
        Self {
            db,
            subject: format!("Request {}", next_id()),
            equipment_id,
            auto_filled_team_id: None,
            assigned_technician_id: None,
            request_type: RequestType::Corrective,
            scheduled_date: None,
            status: RequestStatus::New,
            created_by_id: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn auto_filled_team_id(mut self, team_id: i32) -> Self {
        self.auto_filled_team_id = Some(team_id);
        self
    }

    pub fn assigned_technician_id(mut self, technician_id: i32) -> Self {
        self.assigned_technician_id = Some(technician_id);
        self
    }

    pub fn request_type(mut self, request_type: RequestType) -> Self {
        self.request_type = request_type;
        self
    }

    pub fn scheduled_date(mut self, scheduled_date: NaiveDate) -> Self {
        self.scheduled_date = Some(scheduled_date);
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_by_id(mut self, user_id: i32) -> Self {
        self.created_by_id = Some(user_id);
        self
    }

    /// Builds and inserts the maintenance request into the database.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::maintenance_request::Model, DbErr> {
        entity::maintenance_request::ActiveModel {
            subject: ActiveValue::Set(self.subject),
            equipment_id: ActiveValue::Set(self.equipment_id),
            auto_filled_team_id: ActiveValue::Set(self.auto_filled_team_id),
            assigned_technician_id: ActiveValue::Set(self.assigned_technician_id),
            request_type: ActiveValue::Set(self.request_type),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            status: ActiveValue::Set(self.status),
            created_by_id: ActiveValue::Set(self.created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a maintenance request with default values against the given
/// equipment.
pub async fn create_request(
    db: &DatabaseConnection,
    equipment_id: i32,
) -> Result<entity::maintenance_request::Model, DbErr> {
    RequestFactory::new(db, equipment_id).build().await
}
