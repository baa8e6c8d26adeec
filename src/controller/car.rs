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
    model::car::{CreateCarDto, UpdateCarDto},
    service::car::CarService,
    state::AppState,
};

/// GET /api/cars
/// Public vehicle catalog.
pub async fn list_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db, &state.images);
    let cars = car_service.list().await?;

    Ok((StatusCode::OK, Json(cars)))
}

/// GET /api/cars/{id}
/// Public vehicle detail.
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db, &state.images);
    let car = car_service.get(car_id).await?;

    Ok((StatusCode::OK, Json(car)))
}

/// POST /api/admin/cars
/// Add a car to the catalog.
pub async fn create_car(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    dto.validate()?;

    let car_service = CarService::new(&state.db, &state.images);
    let car = car_service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// PUT /api/admin/cars/{id}
/// Update a car, replacing its picture when a new one is uploaded.
pub async fn update_car(
    State(state): State<AppState>,
    session: Session,
    Path(car_id): Path<i32>,
    Json(dto): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    dto.validate()?;

    let car_service = CarService::new(&state.db, &state.images);
    let car = car_service.update(car_id, dto).await?;

    Ok((StatusCode::OK, Json(car)))
}

/// DELETE /api/admin/cars/{id}
/// Remove a car and its stored picture.
pub async fn delete_car(
    State(state): State<AppState>,
    session: Session,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let car_service = CarService::new(&state.db, &state.images);
    car_service.delete(car_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
