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
    model::order::{CreateOrderDto, UpdateOrderDto, UpdateOrderStatusDto},
    service::order::OrderService,
    state::AppState,
};

/// POST /api/customer/orders
/// Create a new order in `Pending` status.
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    dto.validate()?;

    let order_service = OrderService::new(&state.db);
    let order = order_service.create(authed.user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/customer/orders
/// The current user's order history with cars.
pub async fn my_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    let order_service = OrderService::new(&state.db);
    let orders = order_service.list_for_user(authed.user.id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// GET /api/customer/orders/{id}
/// Detail of one of the current user's orders.
///
/// Responds 404 both when the order does not exist and when it belongs to
/// another user, so order ids don't leak.
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    let order_service = OrderService::new(&state.db);
    let order = order_service.get_owned(order_id, authed.user.id).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// PUT /api/customer/orders/{id}
/// Edit dates/payment while pending, attach a rating while completed, or
/// request cancellation.
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(dto): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    dto.validate()?;

    let order_service = OrderService::new(&state.db);
    let order = order_service
        .update_for_customer(order_id, authed.user.id, dto)
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

/// GET /api/admin/orders
/// All orders with account, customer profile, and car data.
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order_service = OrderService::new(&state.db);
    let orders = order_service.list_all().await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// PUT /api/admin/orders/{id}/status
/// Apply a status transition, keeping car stock consistent.
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order_service = OrderService::new(&state.db);
    let order = order_service.update_status(order_id, dto.status).await?;

    Ok((StatusCode::OK, Json(order)))
}
