use chrono::{DateTime, NaiveDate, Utc};
use entity::maintenance_request::{RequestStatus, RequestType};
use serde::{Deserialize, Serialize};

/// Public view of a maintenance request.
///
/// `is_overdue` is computed at read time and never stored: a request is
/// overdue when it has a scheduled date strictly before today and is not
/// yet REPAIRED or SCRAP.
#[derive(Debug, Serialize)]
pub struct MaintenanceRequestDto {
    pub id: i32,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: i32,
    pub auto_filled_team_id: Option<i32>,
    pub assigned_technician_id: Option<i32>,
    pub request_type: RequestType,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub status: RequestStatus,
    pub scrap_reason: Option<String>,
    pub created_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_overdue: bool,
}

impl MaintenanceRequestDto {
    pub fn from_entity(request: entity::maintenance_request::Model) -> Self {
        let is_overdue = compute_is_overdue(request.scheduled_date, request.status);
        Self {
            id: request.id,
            subject: request.subject,
            description: request.description,
            equipment_id: request.equipment_id,
            auto_filled_team_id: request.auto_filled_team_id,
            assigned_technician_id: request.assigned_technician_id,
            request_type: request.request_type,
            scheduled_date: request.scheduled_date,
            duration_hours: request.duration_hours,
            status: request.status,
            scrap_reason: request.scrap_reason,
            created_by_id: request.created_by_id,
            created_at: request.created_at,
            updated_at: request.updated_at,
            is_overdue,
        }
    }
}

/// Whether a request counts as overdue, relative to the server's current
/// date. Requests without a scheduled date and closed requests never do.
pub fn compute_is_overdue(scheduled_date: Option<NaiveDate>, status: RequestStatus) -> bool {
    match scheduled_date {
        Some(date) => {
            date < Utc::now().date_naive()
                && !matches!(status, RequestStatus::Repaired | RequestStatus::Scrap)
        }
        None => false,
    }
}

/// Payload for creating a maintenance request.
#[derive(Debug, Deserialize)]
pub struct CreateMaintenanceRequestDto {
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: i32,
    #[serde(default = "default_request_type")]
    pub request_type: RequestType,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub assigned_technician_id: Option<i32>,
}

fn default_request_type() -> RequestType {
    RequestType::Corrective
}

/// Partial update payload. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMaintenanceRequestDto {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub assigned_technician_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub status: Option<RequestStatus>,
    pub scrap_reason: Option<String>,
}

/// Paginated request listing.
#[derive(Debug, Serialize)]
pub struct RequestListDto {
    pub items: Vec<MaintenanceRequestDto>,
    pub total: u64,
}

/// Parameters for inserting a request row, produced by the workflow
/// engine after auto-fill and validation.
#[derive(Debug)]
pub struct CreateRequestParams {
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: i32,
    pub auto_filled_team_id: Option<i32>,
    pub assigned_technician_id: Option<i32>,
    pub request_type: RequestType,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub created_by_id: Option<i32>,
}

/// Column changes the workflow engine decided to apply. `None` leaves the
/// column untouched.
#[derive(Debug, Default)]
pub struct UpdateRequestChanges {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub assigned_technician_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub status: Option<RequestStatus>,
    pub scrap_reason: Option<String>,
}

/// Query filter for listing maintenance requests.
#[derive(Debug, Default, Deserialize)]
pub struct RequestFilter {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<RequestStatus>,
    pub request_type: Option<RequestType>,
    pub equipment_id: Option<i32>,
    pub team_id: Option<i32>,
}

/// Query window for the preventive maintenance calendar. Either bound may
/// be left open.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One calendar entry for a scheduled preventive request.
#[derive(Debug, Serialize)]
pub struct CalendarEventDto {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub equipment_name: Option<String>,
    pub status: RequestStatus,
    pub is_overdue: bool,
}
