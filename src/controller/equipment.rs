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
    model::equipment::{CreateEquipmentDto, EquipmentFilter},
    policy::Action,
    service::equipment::EquipmentService,
    state::AppState,
};

/// POST /api/equipment
/// Register a piece of equipment.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageEquipment])
        .await?;

    let equipment = EquipmentService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(equipment)))
}

/// GET /api/equipment
/// List equipment with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<EquipmentFilter>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = EquipmentService::new(&state.db).get_filtered(&filter).await?;

    Ok(Json(page))
}

/// GET /api/equipment/{equipment_id}
/// Fetch one equipment record with its open request count.
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let equipment = EquipmentService::new(&state.db).get(equipment_id).await?;

    Ok(Json(equipment))
}

/// PUT /api/equipment/{equipment_id}
/// Replace an equipment record's fields.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
    Json(dto): Json<CreateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageEquipment])
        .await?;

    let equipment = EquipmentService::new(&state.db)
        .update(equipment_id, dto)
        .await?;

    Ok(Json(equipment))
}

/// DELETE /api/equipment/{equipment_id}
/// Delete an equipment record and its maintenance history.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::DeleteEquipment])
        .await?;

    EquipmentService::new(&state.db).delete(equipment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/equipment/{equipment_id}/requests
/// List the maintenance history of one piece of equipment.
pub async fn requests(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let requests = EquipmentService::new(&state.db).requests(equipment_id).await?;

    Ok(Json(requests))
}
