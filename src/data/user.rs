//! User account repository.

use chrono::Utc;
use entity::user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::user::CreateUserParams;

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            username: ActiveValue::Set(params.username),
            hashed_password: ActiveValue::Set(params.hashed_password),
            full_name: ActiveValue::Set(params.full_name),
            role: ActiveValue::Set(params.role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(entity::user::Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether an email or username is already taken.
    ///
    /// # Returns
    /// - `Ok(true)` - Another account already uses the email or username
    /// - `Ok(false)` - Both are free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_or_username_exists(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(email))
                    .add(entity::user::Column::Username.eq(username)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists user accounts, optionally filtered by role, ordered by username.
    pub async fn get_all(&self, role: Option<Role>) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        query
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    /// Checks if any account with the given role exists.
    ///
    /// Used during startup to decide whether the bootstrap admin account
    /// needs to be seeded.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one account has the role
    /// - `Ok(false)` - No account has the role
    /// - `Err(DbErr)` - Database error during count query
    pub async fn role_exists(&self, role: Role) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
