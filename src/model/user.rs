use chrono::{DateTime, Utc};
use entity::user::Role;
use serde::{Deserialize, Serialize};

/// Public view of a user account. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Payload for registering a new account.
#[derive(Debug, Deserialize)]
pub struct RegisterUserDto {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::User
}

/// Parameters for inserting a user row. Carries the already-hashed
/// password, hashing happens in the auth service.
#[derive(Debug)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub role: Role,
}

/// Payload for username/password login.
#[derive(Debug, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Query filter for listing users.
#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
    pub role: Option<Role>,
}
