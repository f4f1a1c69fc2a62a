//! Aggregate reporting for managers.

use std::collections::HashMap;

use entity::maintenance_request::RequestType;
use sea_orm::DatabaseConnection;

use crate::{
    data::request::MaintenanceRequestRepository,
    error::AppError,
    model::report::{ReportDto, RequestTypeBreakdownDto},
};

/// Number of equipment rows included in the per-equipment breakdown.
const TOP_EQUIPMENT_LIMIT: u64 = 20;
/// Bucket name for requests whose team reference is empty.
const UNASSIGNED_TEAM: &str = "Unassigned";

/// Service producing the reporting snapshot.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the full reporting snapshot.
    ///
    /// Covers request counts per team (teamless requests grouped under
    /// "Unassigned"), counts for the busiest equipment, and the
    /// preventive/corrective split with percentages rounded to two decimal
    /// places.
    ///
    /// # Returns
    /// - `Ok(ReportDto)` - The snapshot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn summary(&self) -> Result<ReportDto, AppError> {
        let request_repo = MaintenanceRequestRepository::new(self.db);

        let requests_per_team: HashMap<String, i64> = request_repo
            .counts_per_team()
            .await?
            .into_iter()
            .map(|(name, count)| (name.unwrap_or_else(|| UNASSIGNED_TEAM.to_string()), count))
            .collect();

        let requests_per_equipment: HashMap<String, i64> = request_repo
            .counts_per_equipment(TOP_EQUIPMENT_LIMIT)
            .await?
            .into_iter()
            .collect();

        let preventive = request_repo.count_by_type(RequestType::Preventive).await?;
        let corrective = request_repo.count_by_type(RequestType::Corrective).await?;

        Ok(ReportDto {
            requests_per_team,
            requests_per_equipment,
            preventive_vs_corrective: breakdown(preventive, corrective),
        })
    }
}

/// Computes the preventive/corrective split. Both percentages are zero when
/// there are no requests at all.
fn breakdown(preventive: u64, corrective: u64) -> RequestTypeBreakdownDto {
    let total = preventive + corrective;

    let (preventive_percentage, corrective_percentage) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            round2(preventive as f64 / total as f64 * 100.0),
            round2(corrective as f64 / total as f64 * 100.0),
        )
    };

    RequestTypeBreakdownDto {
        preventive,
        corrective,
        preventive_percentage,
        corrective_percentage,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
