//! Maintenance team factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a maintenance team with a unique generated name.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::maintenance_team::Model, DbErr> {
    create_team_named(db, format!("Team {}", next_id())).await
}

/// Creates a maintenance team with a specific name.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_name` - Unique team name
///
/// # Returns
/// - `Ok(entity::maintenance_team::Model)` - Created team entity
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
pub async fn create_team_named(
    db: &DatabaseConnection,
    team_name: impl Into<String>,
) -> Result<entity::maintenance_team::Model, DbErr> {
    entity::maintenance_team::ActiveModel {
        team_name: ActiveValue::Set(team_name.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
