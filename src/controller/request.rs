use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::request::{
        CalendarQuery, CreateMaintenanceRequestDto, RequestFilter, RequestListDto,
        UpdateMaintenanceRequestDto,
    },
    policy::Action,
    service::request::RequestService,
    state::AppState,
};

/// POST /api/requests
/// Create a maintenance request. Team and default technician are filled in
/// from the equipment record.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Action::CreateRequest])
        .await?;

    let request = RequestService::new(&state.db).create(dto, &user).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/requests
/// List requests with filters and pagination. Technicians only see their
/// teams' requests.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<RequestFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (items, total) = RequestService::new(&state.db)
        .get_filtered(&filter, &user)
        .await?;

    Ok(Json(RequestListDto { items, total }))
}

/// GET /api/requests/calendar
/// Scheduled preventive requests inside a date window, as calendar events.
pub async fn calendar(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = RequestService::new(&state.db)
        .preventive_calendar(&query, &user)
        .await?;

    Ok(Json(events))
}

/// GET /api/requests/{request_id}
/// Fetch one request.
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let request = RequestService::new(&state.db).get(request_id, &user).await?;

    Ok(Json(request))
}

/// PUT /api/requests/{request_id}
/// Partially update a request. Status changes and assignment go through
/// the workflow rules.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
    Json(dto): Json<UpdateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Action::UpdateRequestDetails])
        .await?;

    let request = RequestService::new(&state.db)
        .update(request_id, dto, &user)
        .await?;

    Ok(Json(request))
}

/// DELETE /api/requests/{request_id}
/// Delete a request.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::DeleteRequest])
        .await?;

    RequestService::new(&state.db).delete(request_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
