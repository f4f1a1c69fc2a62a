//! Account registration and credential verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginDto, RegisterUserDto, UserDto},
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Service for account management and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `dto` - Registration payload with the plaintext password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(AppError::Validation)` - Empty username/email or short password
    /// - `Err(AppError::Conflict)` - Email or username already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        if dto.username.trim().is_empty() || dto.email.trim().is_empty() {
            return Err(AppError::Validation(
                "Username and email must not be empty".to_string(),
            ));
        }
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .email_or_username_exists(&dto.email, &dto.username)
            .await?
        {
            return Err(AppError::Conflict(
                "Email or username already registered".to_string(),
            ));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = user_repo
            .create(CreateUserParams {
                email: dto.email,
                username: dto.username,
                hashed_password,
                full_name: dto.full_name,
                role: dto.role,
            })
            .await?;

        Ok(UserDto::from_entity(user))
    }

    /// Verifies credentials and returns the account on success.
    ///
    /// The same error is returned for an unknown username and a wrong
    /// password so the endpoint does not leak which usernames exist.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Credentials valid, account active
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::AuthErr(InactiveUser))` - Account deactivated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, dto: LoginDto) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&dto.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.hashed_password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::InactiveUser.into());
        }

        Ok(user)
    }

    /// Lists accounts, optionally filtered by role.
    pub async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserDto>, AppError> {
        let users = UserRepository::new(self.db).get_all(role).await?;
        Ok(users.into_iter().map(UserDto::from_entity).collect())
    }
}

/// Hashes a plaintext password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::InternalError(format!("Password hashing failed: {err}")))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// An unparseable stored hash counts as a mismatch.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hashed) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
