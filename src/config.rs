/// Application configuration loaded from the environment.
///
/// Every value has a development default so a bare `cargo run` works
/// against a local SQLite file.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Credentials for the bootstrap admin account seeded on first start.
    pub admin_email: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env_or("DATABASE_URL", "sqlite://gearguard.db?mode=rwc"),
            bind_address: env_or("BIND_ADDRESS", "0.0.0.0:8000"),
            admin_email: env_or("ADMIN_EMAIL", "admin@gearguard.com"),
            admin_username: env_or("ADMIN_USERNAME", "admin"),
            admin_password: env_or("ADMIN_PASSWORD", "admin123"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
