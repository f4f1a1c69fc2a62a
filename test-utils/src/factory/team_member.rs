//! Team membership factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a user to a team with no display name.
pub async fn create_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    create_member_named(db, team_id, user_id, None).await
}

/// Adds a user to a team with an optional per-team display name.
///
/// # Returns
/// - `Ok(entity::team_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error (e.g. duplicate membership)
pub async fn create_member_named(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
    display_name: Option<String>,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        user_id: ActiveValue::Set(user_id),
        display_name: ActiveValue::Set(display_name),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
