use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::team::{AddTeamMemberDto, CreateTeamDto, UpdateTeamMemberDto},
    policy::Action,
    service::team::TeamService,
    state::AppState,
};

/// POST /api/teams
/// Create a maintenance team.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageTeams])
        .await?;

    let team = TeamService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/teams
/// List all teams with their rosters.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teams = TeamService::new(&state.db).get_all().await?;

    Ok(Json(teams))
}

/// GET /api/teams/{team_id}
/// Fetch one team with its roster.
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db).get(team_id).await?;

    Ok(Json(team))
}

/// PUT /api/teams/{team_id}
/// Rename a team.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageTeams])
        .await?;

    let team = TeamService::new(&state.db).rename(team_id, dto).await?;

    Ok(Json(team))
}

/// DELETE /api/teams/{team_id}
/// Delete a team and its roster.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::DeleteTeam])
        .await?;

    TeamService::new(&state.db).delete(team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/teams/{team_id}/members
/// Add a technician to the team.
pub async fn add_member(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(dto): Json<AddTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageTeams])
        .await?;

    let team = TeamService::new(&state.db).add_member(team_id, dto).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT /api/teams/{team_id}/members/{user_id}
/// Update a roster entry's display name.
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
    Json(dto): Json<UpdateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageTeams])
        .await?;

    let team = TeamService::new(&state.db)
        .update_member(team_id, user_id, dto)
        .await?;

    Ok(Json(team))
}

/// DELETE /api/teams/{team_id}/members/{user_id}
/// Remove a user from the team's roster.
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageTeams])
        .await?;

    TeamService::new(&state.db)
        .remove_member(team_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
