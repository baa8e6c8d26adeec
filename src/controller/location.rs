use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::location::{CreateLocationDto, UpdateLocationDto},
    service::location::LocationService,
    state::AppState,
};

/// GET /api/locations
/// Public rental location listing.
pub async fn list_locations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let location_service = LocationService::new(&state.db);
    let locations = location_service.list().await?;

    Ok((StatusCode::OK, Json(locations)))
}

/// GET /api/locations/{id}
/// Public rental location detail.
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let location_service = LocationService::new(&state.db);
    let location = location_service.get(location_id).await?;

    Ok((StatusCode::OK, Json(location)))
}

/// POST /api/admin/locations
/// Add a rental location.
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    dto.validate()?;

    let location_service = LocationService::new(&state.db);
    let location = location_service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(location)))
}

/// PUT /api/admin/locations/{id}
/// Update a rental location.
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(dto): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    dto.validate()?;

    let location_service = LocationService::new(&state.db);
    let location = location_service.update(location_id, dto).await?;

    Ok((StatusCode::OK, Json(location)))
}

/// DELETE /api/admin/locations/{id}
/// Remove a rental location.
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location_service = LocationService::new(&state.db);
    location_service.delete(location_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
