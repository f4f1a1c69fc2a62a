//! Team membership repository.
//!
//! The membership table is the single source of truth for "who is on which
//! team". The workflow engine consults it for every technician-scoped
//! decision, so the lookups here are kept narrow and indexable.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

/// Repository providing database operations for team rosters.
pub struct TeamMembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMembershipRepository<'a> {
    /// Creates a new TeamMembershipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a team.
    ///
    /// # Arguments
    /// - `team_id` - Team receiving the member
    /// - `user_id` - User being added
    /// - `display_name` - Per-team label, already resolved by the service
    ///
    /// # Returns
    /// - `Ok(entity::team_member::Model)` - The created membership
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn add(
        &self,
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
        .insert(self.db)
        .await
    }

    /// Finds the membership row for a (team, user) pair.
    pub async fn find(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists a team's roster with each member's user account.
    ///
    /// # Returns
    /// - `Ok(Vec<(member, Option<user>)>)` - Roster entries joined with users
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<(entity::team_member::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Updates the display name on a membership row.
    pub async fn update_display_name(
        &self,
        member_id: i32,
        display_name: Option<String>,
    ) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            id: ActiveValue::Unchanged(member_id),
            display_name: ActiveValue::Set(display_name),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Removes a user from a team.
    pub async fn remove(&self, team_id: i32, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Checks whether a user belongs to a team.
    ///
    /// `None` for the team means the record has no team, which never counts
    /// as membership.
    ///
    /// # Returns
    /// - `Ok(true)` - The user is on the team
    /// - `Ok(false)` - No membership, or `team_id` was `None`
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_member(&self, user_id: i32, team_id: Option<i32>) -> Result<bool, DbErr> {
        let Some(team_id) = team_id else {
            return Ok(false);
        };

        let count = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists the ids of every team the user belongs to.
    ///
    /// Used to scope technicians' request listings to their teams.
    pub async fn team_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }
}
