use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::message::SendMessageDto,
    service::message::MessageService,
    state::AppState,
};

/// POST /api/customer/messages and POST /api/admin/messages
/// Send a message; who may message whom is enforced by the service.
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session).require(&[]).await?;

    dto.validate()?;

    let message_service = MessageService::new(&state.db);
    let message = message_service.send(&authed, dto).await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/customer/messages
/// The current user's conversation history, oldest first.
pub async fn my_messages(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    let message_service = MessageService::new(&state.db);
    let messages = message_service.list_for_user(authed.user.id).await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// GET /api/admin/messages
/// Every message, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let message_service = MessageService::new(&state.db);
    let messages = message_service.list_all().await?;

    Ok((StatusCode::OK, Json(messages)))
}
