use chrono::{NaiveDate, Utc};
use entity::order::OrderStatus;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::{car::CarDto, customer::CustomerDto, user::UserSummaryDto};

/// Request body for `POST /api/customer/orders`.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_create_order))]
pub struct CreateOrderDto {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, max = 255, message = "Payment method is required"))]
    pub payment_method: String,
}

fn validate_create_order(dto: &CreateOrderDto) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if dto.start_date < today {
        return Err(ValidationError::new("start_date_in_past")
            .with_message("Start date must not be before today".into()));
    }
    if dto.end_date < dto.start_date {
        return Err(ValidationError::new("end_date_before_start")
            .with_message("End date must not be before the start date".into()));
    }
    Ok(())
}

/// Request body for `PUT /api/customer/orders/{id}`.
///
/// Every field is optional; which ones are honored depends on the order's
/// current status (see `OrderService::update_for_customer`).
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = validate_update_order))]
pub struct UpdateOrderDto {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255, message = "Payment method must not be empty"))]
    pub payment_method: Option<String>,
    pub status: Option<OrderStatus>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

fn validate_update_order(dto: &UpdateOrderDto) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (dto.start_date, dto.end_date) {
        if end < start {
            return Err(ValidationError::new("end_date_before_start")
                .with_message("End date must not be before the start date".into()));
        }
    }
    Ok(())
}

/// Request body for `PUT /api/admin/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}

/// Order as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_method: String,
    pub status: OrderStatus,
    pub rating: Option<i32>,
}

impl From<entity::order::Model> for OrderDto {
    fn from(order: entity::order::Model) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            car_id: order.car_id,
            start_date: order.start_date,
            end_date: order.end_date,
            payment_method: order.payment_method,
            status: order.status,
            rating: order.rating,
        }
    }
}

/// Order with the ordered car embedded, used by the customer views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithCarDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub car: CarDto,
}

/// Order with account and vehicle data embedded, used by the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub user: AdminOrderUserDto,
    pub car: CarDto,
}

/// The ordering user's account and customer profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderUserDto {
    #[serde(flatten)]
    pub user: UserSummaryDto,
    pub account_status: entity::user::AccountStatus,
    pub customer: Option<CustomerDto>,
}

/// Parameters for inserting a new order row.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_method: String,
}

/// Field changes the service has authorized for a customer order update.
///
/// Assembled by `OrderService::update_for_customer` after all business rules
/// have passed; the repository applies it verbatim.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub status: Option<OrderStatus>,
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The status vocabulary is part of the API contract; clients match on the
    /// exact strings.
    #[test]
    fn status_wire_values() {
        let cases = [
            (OrderStatus::Pending, "\"Pending\""),
            (OrderStatus::Confirmed, "\"Dikonfirmasi\""),
            (OrderStatus::Cancelled, "\"Dibatalkan\""),
            (OrderStatus::Completed, "\"Selesai\""),
        ];

        for (status, wire) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(
                serde_json::from_str::<OrderStatus>(wire).unwrap(),
                status
            );
        }
    }

    #[test]
    fn update_status_dto_rejects_unknown_values() {
        let result = serde_json::from_str::<UpdateOrderStatusDto>(r#"{"status": "Dikirim"}"#);

        assert!(result.is_err());
    }
}
