use chrono::{DateTime, NaiveDate, Utc};
use entity::equipment::EquipmentStatus;
use serde::{Deserialize, Serialize};

/// Public view of an equipment record.
///
/// `open_requests_count` is the number of NEW or IN_PROGRESS requests
/// against this unit, computed at read time.
#[derive(Debug, Serialize)]
pub struct EquipmentDto {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub department: Option<String>,
    pub assigned_employee_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub location: Option<String>,
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    pub status: EquipmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub open_requests_count: u64,
}

impl EquipmentDto {
    pub fn from_entity(equipment: entity::equipment::Model, open_requests_count: u64) -> Self {
        Self {
            id: equipment.id,
            name: equipment.name,
            serial_number: equipment.serial_number,
            department: equipment.department,
            assigned_employee_id: equipment.assigned_employee_id,
            purchase_date: equipment.purchase_date,
            warranty_expiry: equipment.warranty_expiry,
            location: equipment.location,
            maintenance_team_id: equipment.maintenance_team_id,
            default_technician_id: equipment.default_technician_id,
            status: equipment.status,
            created_at: equipment.created_at,
            updated_at: equipment.updated_at,
            open_requests_count,
        }
    }
}

/// Paginated equipment listing.
#[derive(Debug, Serialize)]
pub struct EquipmentListDto {
    pub items: Vec<EquipmentDto>,
    pub total: u64,
}

/// Payload for creating equipment, and for full-replace updates.
#[derive(Debug, Deserialize)]
pub struct CreateEquipmentDto {
    pub name: String,
    pub serial_number: Option<String>,
    pub department: Option<String>,
    pub assigned_employee_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub location: Option<String>,
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    #[serde(default = "default_status")]
    pub status: EquipmentStatus,
}

fn default_status() -> EquipmentStatus {
    EquipmentStatus::Active
}

/// Query filter for listing equipment.
#[derive(Debug, Default, Deserialize)]
pub struct EquipmentFilter {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    /// Substring match on name, serial number, and location.
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EquipmentStatus>,
}
