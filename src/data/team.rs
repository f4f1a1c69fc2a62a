//! Maintenance team repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for maintenance teams.
pub struct MaintenanceTeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceTeamRepository<'a> {
    /// Creates a new MaintenanceTeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_team::Model)` - The created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, team_name: String) -> Result<entity::maintenance_team::Model, DbErr> {
        entity::maintenance_team::ActiveModel {
            team_name: ActiveValue::Set(team_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a team by primary key.
    pub async fn get_by_id(
        &self,
        team_id: i32,
    ) -> Result<Option<entity::maintenance_team::Model>, DbErr> {
        entity::prelude::MaintenanceTeam::find_by_id(team_id)
            .one(self.db)
            .await
    }

    /// Lists all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::maintenance_team::Model>, DbErr> {
        entity::prelude::MaintenanceTeam::find()
            .order_by_asc(entity::maintenance_team::Column::TeamName)
            .all(self.db)
            .await
    }

    /// Renames a team.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_team::Model)` - The updated team
    /// - `Err(DbErr)` - Database error during update
    pub async fn rename(
        &self,
        team_id: i32,
        team_name: String,
    ) -> Result<entity::maintenance_team::Model, DbErr> {
        entity::maintenance_team::ActiveModel {
            id: ActiveValue::Unchanged(team_id),
            team_name: ActiveValue::Set(team_name),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a team. Memberships cascade at the database level.
    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MaintenanceTeam::delete_by_id(team_id)
            .exec(self.db)
            .await
    }

    /// Checks whether a team name is already taken, optionally ignoring one
    /// team id (for renames).
    ///
    /// # Returns
    /// - `Ok(true)` - Another team already uses the name
    /// - `Ok(false)` - The name is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn name_exists(&self, team_name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MaintenanceTeam::find()
            .filter(entity::maintenance_team::Column::TeamName.eq(team_name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::maintenance_team::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
