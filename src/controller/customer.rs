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
    model::customer::{UpdateAccountStatusDto, UpdateProfileDto, UploadIdentityDto},
    service::customer::CustomerService,
    state::AppState,
};

/// GET /api/customer/profile
/// The current user's customer profile.
pub async fn my_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    let customer_service = CustomerService::new(&state.db);
    let profile = customer_service.profile(authed.user.id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// PUT /api/customer/profile
/// Update the current user's address / identity fields.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    dto.validate()?;

    let customer_service = CustomerService::new(&state.db);
    let profile = customer_service.update_profile(authed.user.id, dto).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// POST /api/customer/identity
/// Upload an identity document (base64 image).
pub async fn upload_identity(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UploadIdentityDto>,
) -> Result<impl IntoResponse, AppError> {
    let authed = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Customer])
        .await?;

    dto.validate()?;

    let customer_service = CustomerService::new(&state.db);
    let profile = customer_service
        .upload_identity(authed.user.id, dto)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// GET /api/admin/customers
/// All customers with their account data.
pub async fn list_customers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let customer_service = CustomerService::new(&state.db);
    let customers = customer_service.list().await?;

    Ok((StatusCode::OK, Json(customers)))
}

/// GET /api/admin/customers/{id}
/// Customer detail with account data.
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let customer_service = CustomerService::new(&state.db);
    let customer = customer_service.get(customer_id).await?;

    Ok((StatusCode::OK, Json(customer)))
}

/// PUT /api/admin/customers/{user_id}/status
/// Set a customer account's verification status.
pub async fn update_account_status(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(dto): Json<UpdateAccountStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let customer_service = CustomerService::new(&state.db);
    let user = customer_service
        .set_account_status(user_id, dto.account_status)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
