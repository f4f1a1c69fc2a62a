use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// A maintenance team with its current roster.
#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: i32,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub members: Vec<TeamMemberDto>,
}

/// One roster entry. `display_name` is the per-team label chosen when the
/// member was added, falling back to the user's full name or username.
#[derive(Debug, Serialize)]
pub struct TeamMemberDto {
    pub id: i32,
    pub user_id: i32,
    pub display_name: Option<String>,
    pub user: Option<UserDto>,
}

impl TeamMemberDto {
    pub fn from_entity(
        member: entity::team_member::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: member.id,
            user_id: member.user_id,
            display_name: member.display_name,
            user: user.map(UserDto::from_entity),
        }
    }
}

/// Payload for creating or renaming a team.
#[derive(Debug, Deserialize)]
pub struct CreateTeamDto {
    pub team_name: String,
}

/// Payload for adding a technician to a team.
#[derive(Debug, Deserialize)]
pub struct AddTeamMemberDto {
    pub user_id: i32,
    pub display_name: Option<String>,
}

/// Payload for updating a roster entry's display name.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamMemberDto {
    pub display_name: Option<String>,
}
