use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is stored in the session. Results in 401 Unauthorized.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The session references a user id that no longer exists in the
    /// database (e.g. the account was deleted). Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login with an unknown username or a wrong password. Results in
    /// 401 Unauthorized with a deliberately unspecific message.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Login attempt for a soft-deactivated account. Results in
    /// 400 Bad Request.
    #[error("Inactive user")]
    InactiveUser,

    /// The authorization policy denied the action for the user's role.
    /// Results in 403 Forbidden.
    #[error("User {0} denied: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Denial details are logged at debug level for diagnostics while
/// client-facing messages stay generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For inactive accounts at login
/// - 401 Unauthorized - For missing sessions, stale sessions, and bad credentials
/// - 403 Forbidden - For policy denials
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Incorrect username or password".to_string(),
                }),
            )
                .into_response(),
            Self::InactiveUser => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Inactive user".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!(user_id, %reason, "access denied");
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Not authorized to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
