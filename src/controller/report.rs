use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, policy::Action, service::report::ReportService,
    state::AppState,
};

/// GET /api/reports/summary
/// Aggregate maintenance statistics for managers.
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ViewReports])
        .await?;

    let report = ReportService::new(&state.db).summary().await?;

    Ok(Json(report))
}
