use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::{LoginDto, RegisterUserDto, UserDto, UserFilter},
    policy::Action,
    service::auth::AuthService,
    state::AppState,
};

/// POST /api/auth/register
/// Create a new account. Open endpoint; the default role is USER.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).register(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/auth/login
/// Verify credentials and establish a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Json(UserDto::from_entity(user)))
}

/// POST /api/auth/logout
/// Drop the current session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
/// Return the authenticated user's own account.
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(Json(UserDto::from_entity(user)))
}

/// GET /api/users
/// List accounts, optionally filtered by role.
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Action::ManageUsers])
        .await?;

    let users = AuthService::new(&state.db).list_users(filter.role).await?;

    Ok(Json(users))
}
