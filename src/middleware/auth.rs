use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    policy::{self, Action},
};

/// Resolves the session to a user and enforces the role policy.
///
/// Controllers construct one per request and call [`AuthGuard::require`]
/// with the actions the endpoint performs. Contextual checks such as team
/// membership stay in the services, the guard only answers identity and
/// role questions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the current principal and checks it may perform the actions.
    ///
    /// An empty action slice means "any authenticated, active user".
    ///
    /// # Arguments
    /// - `actions` - Actions the endpoint performs, checked against the policy table
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The authenticated principal
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No user in session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session references a deleted user
    /// - `Err(AppError::AuthErr(InactiveUser))` - Account has been deactivated
    /// - `Err(AppError::AuthErr(AccessDenied))` - Policy denies one of the actions
    pub async fn require(&self, actions: &[Action]) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::InactiveUser.into());
        }

        for action in actions {
            if !policy::allows(user.role, action) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("role {:?} may not perform {:?}", user.role, action),
                )
                .into());
            }
        }

        Ok(user)
    }
}
