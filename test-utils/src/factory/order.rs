use chrono::{Duration, Utc};
use entity::order::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::order::OrderStatus;
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, user.id, car.id)
///     .status(OrderStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    car_id: i32,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    payment_method: String,
    status: OrderStatus,
    rating: Option<i32>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - start_date: tomorrow
    /// - end_date: three days after start
    /// - payment_method: `"Transfer Bank"`
    /// - status: `Pending`
    /// - rating: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the ordering user
    /// - `car_id` - Id of the ordered car
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32) -> Self {
        let start = Utc::now().date_naive() + Duration::days(1);
        Self {
            db,
            user_id,
            car_id,
            start_date: start,
            end_date: start + Duration::days(3),
            payment_method: "Transfer Bank".to_string(),
            status: OrderStatus::Pending,
            rating: None,
        }
    }

    /// Sets the rental start date.
    pub fn start_date(mut self, start_date: chrono::NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the rental end date.
    pub fn end_date(mut self, end_date: chrono::NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the payment method.
    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    /// Sets the order status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the post-completion rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            payment_method: ActiveValue::Set(self.payment_method),
            status: ActiveValue::Set(self.status),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Pending` order with default values.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, car_id).build().await
}
