use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Can happen when an account is deleted while a session is still live.
    /// Results in a 401 Unauthorized response.
    #[error("Authenticated user {0} no longer exists in the database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required by the route.
    ///
    /// Results in a 403 Forbidden response; the detail message is logged
    /// server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed because the email/password pair did not match.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Email or password is incorrect")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Denied-access details are logged at debug level while client-facing messages
/// stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_code(
                    "unauthenticated",
                    "You must be logged in to perform this action.",
                )),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} not found in database", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::with_code("unauthenticated", "User not found.")),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::with_code(
                        "forbidden",
                        "You do not have permission to perform this action.",
                    )),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_code(
                    "invalid_credentials",
                    "Email or password is incorrect.",
                )),
            )
                .into_response(),
        }
    }
}
