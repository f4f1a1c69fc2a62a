use std::collections::HashMap;

use serde::Serialize;

/// Aggregate reporting snapshot for managers.
#[derive(Debug, Serialize)]
pub struct ReportDto {
    /// Request counts keyed by team name. Requests without a team are
    /// grouped under "Unassigned".
    pub requests_per_team: HashMap<String, i64>,
    /// Request counts keyed by equipment name, top entries only.
    pub requests_per_equipment: HashMap<String, i64>,
    pub preventive_vs_corrective: RequestTypeBreakdownDto,
}

/// Split of request volume by type, with percentages rounded to two
/// decimal places. Percentages are zero when there are no requests.
#[derive(Debug, Serialize)]
pub struct RequestTypeBreakdownDto {
    pub preventive: u64,
    pub corrective: u64,
    pub preventive_percentage: f64,
    pub corrective_percentage: f64,
}
