use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, equipment, health, report, request, team},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(auth::list_users))
        .route("/api/teams", post(team::create).get(team::list))
        .route(
            "/api/teams/{team_id}",
            get(team::get).put(team::update).delete(team::delete),
        )
        .route("/api/teams/{team_id}/members", post(team::add_member))
        .route(
            "/api/teams/{team_id}/members/{user_id}",
            axum::routing::put(team::update_member).delete(team::remove_member),
        )
        .route("/api/equipment", post(equipment::create).get(equipment::list))
        .route(
            "/api/equipment/{equipment_id}",
            get(equipment::get)
                .put(equipment::update)
                .delete(equipment::delete),
        )
        .route(
            "/api/equipment/{equipment_id}/requests",
            get(equipment::requests),
        )
        .route("/api/requests", post(request::create).get(request::list))
        .route("/api/requests/calendar", get(request::calendar))
        .route(
            "/api/requests/{request_id}",
            get(request::get).put(request::update).delete(request::delete),
        )
        .route("/api/reports/summary", get(report::summary))
}
