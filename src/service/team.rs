//! Maintenance team and roster management.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::{
    data::{team::MaintenanceTeamRepository, team_member::TeamMembershipRepository, user::UserRepository},
    error::AppError,
    model::team::{AddTeamMemberDto, CreateTeamDto, TeamDto, TeamMemberDto, UpdateTeamMemberDto},
};

/// Service for maintenance teams and their rosters.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new TeamService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The created team with an empty roster
    /// - `Err(AppError::Validation)` - Empty team name
    /// - `Err(AppError::Conflict)` - Team name already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateTeamDto) -> Result<TeamDto, AppError> {
        let team_name = dto.team_name.trim().to_string();
        if team_name.is_empty() {
            return Err(AppError::Validation("Team name must not be empty".to_string()));
        }

        let team_repo = MaintenanceTeamRepository::new(self.db);

        if team_repo.name_exists(&team_name, None).await? {
            return Err(AppError::Conflict("Team name already exists".to_string()));
        }

        let team = team_repo.create(team_name).await?;
        self.to_dto(team).await
    }

    /// Fetches one team with its roster.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, team_id: i32) -> Result<TeamDto, AppError> {
        let team = self.require_team(team_id).await?;
        self.to_dto(team).await
    }

    /// Lists all teams with their rosters, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<TeamDto>, AppError> {
        let teams = MaintenanceTeamRepository::new(self.db).get_all().await?;

        let mut dtos = Vec::with_capacity(teams.len());
        for team in teams {
            dtos.push(self.to_dto(team).await?);
        }

        Ok(dtos)
    }

    /// Renames a team.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The updated team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::Conflict)` - New name already taken by another team
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn rename(&self, team_id: i32, dto: CreateTeamDto) -> Result<TeamDto, AppError> {
        let team_name = dto.team_name.trim().to_string();
        if team_name.is_empty() {
            return Err(AppError::Validation("Team name must not be empty".to_string()));
        }

        self.require_team(team_id).await?;

        let team_repo = MaintenanceTeamRepository::new(self.db);

        if team_repo.name_exists(&team_name, Some(team_id)).await? {
            return Err(AppError::Conflict("Team name already exists".to_string()));
        }

        let team = team_repo.rename(team_id, team_name).await?;
        self.to_dto(team).await
    }

    /// Deletes a team. Roster entries cascade; equipment and request
    /// references to the team are set to null.
    pub async fn delete(&self, team_id: i32) -> Result<(), AppError> {
        self.require_team(team_id).await?;

        MaintenanceTeamRepository::new(self.db)
            .delete(team_id)
            .await?;

        Ok(())
    }

    /// Adds a technician to a team.
    ///
    /// The display name falls back to the user's full name, then their
    /// username, when the payload does not provide one.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team with its updated roster
    /// - `Err(AppError::NotFound)` - Team or user missing
    /// - `Err(AppError::Validation)` - User is not a technician
    /// - `Err(AppError::Conflict)` - User already on the team
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_member(&self, team_id: i32, dto: AddTeamMemberDto) -> Result<TeamDto, AppError> {
        let team = self.require_team(team_id).await?;

        let Some(user) = UserRepository::new(self.db).find_by_id(dto.user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if user.role != Role::Technician {
            return Err(AppError::Validation(
                "Only technicians can be added to maintenance teams".to_string(),
            ));
        }

        let membership_repo = TeamMembershipRepository::new(self.db);

        if membership_repo.find(team_id, user.id).await?.is_some() {
            return Err(AppError::Conflict(
                "User is already a member of this team".to_string(),
            ));
        }

        let display_name = dto
            .display_name
            .or_else(|| user.full_name.clone())
            .or_else(|| Some(user.username.clone()));

        membership_repo.add(team_id, user.id, display_name).await?;

        self.to_dto(team).await
    }

    /// Updates a roster entry's display name.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team with its updated roster
    /// - `Err(AppError::NotFound)` - Team or membership missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_member(
        &self,
        team_id: i32,
        user_id: i32,
        dto: UpdateTeamMemberDto,
    ) -> Result<TeamDto, AppError> {
        let team = self.require_team(team_id).await?;

        let membership_repo = TeamMembershipRepository::new(self.db);

        let Some(member) = membership_repo.find(team_id, user_id).await? else {
            return Err(AppError::NotFound("Team member not found".to_string()));
        };

        membership_repo
            .update_display_name(member.id, dto.display_name)
            .await?;

        self.to_dto(team).await
    }

    /// Removes a user from a team's roster.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - Team or membership missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        self.require_team(team_id).await?;

        let membership_repo = TeamMembershipRepository::new(self.db);

        if membership_repo.find(team_id, user_id).await?.is_none() {
            return Err(AppError::NotFound("Team member not found".to_string()));
        }

        membership_repo.remove(team_id, user_id).await?;

        Ok(())
    }

    async fn require_team(&self, team_id: i32) -> Result<entity::maintenance_team::Model, AppError> {
        MaintenanceTeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance team not found".to_string()))
    }

    async fn to_dto(&self, team: entity::maintenance_team::Model) -> Result<TeamDto, AppError> {
        let roster = TeamMembershipRepository::new(self.db)
            .get_by_team(team.id)
            .await?;

        Ok(TeamDto {
            id: team.id,
            team_name: team.team_name,
            created_at: team.created_at,
            members: roster
                .into_iter()
                .map(|(member, user)| TeamMemberDto::from_entity(member, user))
                .collect(),
        })
    }
}
