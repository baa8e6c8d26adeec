use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::{LoginDto, RegisterDto, UserDto},
    service::auth::AuthService,
    state::AppState,
};

/// POST /api/register
/// Create a customer account (unverified) with its profile row.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    dto.validate()?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service.register(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/login
/// Verify credentials and establish a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    dto.validate()?;

    let auth_service = AuthService::new(&state.db);
    let (user, role) = auth_service.login(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from_parts(user, role))))
}

/// POST /api/logout
/// Clear the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/user-profile
/// Current user with their role name.
pub async fn user_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(UserDto::from_parts(authed.user, authed.role)),
    ))
}
