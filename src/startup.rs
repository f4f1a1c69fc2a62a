use entity::user::Role;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::RegisterUserDto,
    service::auth::AuthService,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database.
///
/// Sessions live in their own table, managed by the store, and expire
/// after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Ready-to-mount session layer
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the bootstrap admin account when no admin exists yet.
///
/// Runs once per startup. The credentials come from configuration; change
/// them in production environments.
///
/// # Returns
/// - `Ok(())` - Admin present or freshly seeded
/// - `Err(AppError)` - Database or hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).role_exists(Role::Admin).await? {
        return Ok(());
    }

    let admin = AuthService::new(db)
        .register(RegisterUserDto {
            email: config.admin_email.clone(),
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
            full_name: Some("System Administrator".to_string()),
            role: Role::Admin,
        })
        .await?;

    tracing::info!(username = %admin.username, "seeded bootstrap admin account");

    Ok(())
}
