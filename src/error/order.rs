use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::order::OrderStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business-rule violations raised by the order/inventory coordinator.
///
/// All variants reject the requested change without mutating stock or status,
/// and map to a 400 response with a distinguishing `code`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// The car has no unit left to reserve for a confirmation.
    #[error("Car stock is exhausted")]
    InsufficientStock,

    /// The order cannot move from its current status to the requested one.
    #[error("Order cannot move from {from} to {requested}")]
    InvalidTransition {
        from: OrderStatus,
        requested: OrderStatus,
    },

    /// A customer requested a status other than cancellation.
    #[error("Customers may only change an order status to Dibatalkan")]
    CustomerStatusNotAllowed,

    /// A rating was submitted while the order is not completed.
    #[error("Rating can only be given once the order is Selesai")]
    RatingRequiresCompleted,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            Self::InsufficientStock => (
                "insufficient_stock",
                "Car stock is exhausted. The order cannot be confirmed.".to_string(),
            ),
            Self::InvalidTransition { from, requested } => (
                "invalid_transition",
                format!("The order cannot move from {} to {}.", from, requested),
            ),
            Self::CustomerStatusNotAllowed => (
                "invalid_transition",
                "Customers may only change an order status to \"Dibatalkan\".".to_string(),
            ),
            Self::RatingRequiresCompleted => (
                "rating_not_allowed",
                "A rating can only be given once the order status is \"Selesai\".".to_string(),
            ),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::with_code(code, message)),
        )
            .into_response()
    }
}
