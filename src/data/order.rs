use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::order::{CreateOrderParams, OrderChanges};
use entity::order::OrderStatus;

/// Repository for rental orders.
///
/// Generic over the connection so status transitions can run on the transaction
/// opened by the order/inventory coordinator.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new order in `Pending` status with no rating.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created order
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateOrderParams,
    ) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            car_id: ActiveValue::Set(params.car_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            payment_method: ActiveValue::Set(params.payment_method),
            status: ActiveValue::Set(OrderStatus::Pending),
            rating: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Finds an order by id.
    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id).one(self.conn).await
    }

    /// Finds an order by id, restricted to the given owner.
    ///
    /// Returns `None` both when the order does not exist and when it belongs to
    /// another user, so callers don't leak existence.
    pub async fn find_owned(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.conn)
            .await
    }

    /// Finds an owned order together with its car.
    pub async fn find_owned_with_car(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<(entity::order::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Car)
            .one(self.conn)
            .await
    }

    /// Lists a user's orders together with their cars, newest first.
    pub async fn get_for_user_with_car(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::order::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .find_also_related(entity::prelude::Car)
            .all(self.conn)
            .await
    }

    /// Lists every order together with the ordering user, for the admin view.
    pub async fn get_all_with_user(
        &self,
    ) -> Result<Vec<(entity::order::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.conn)
            .await
    }

    /// Updates an order's status.
    ///
    /// Stock bookkeeping is the coordinator's responsibility; this only writes
    /// the status column.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated order
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        order: entity::order::Model,
        status: OrderStatus,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active: entity::order::ActiveModel = order.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.conn).await
    }

    /// Applies a set of already-authorized field changes.
    ///
    /// `OrderChanges` is assembled by the service after every business rule has
    /// passed; `None` fields keep their stored values.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated order
    /// - `Err(DbErr)`: Database error
    pub async fn apply_changes(
        &self,
        order: entity::order::Model,
        changes: OrderChanges,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active: entity::order::ActiveModel = order.into();
        if let Some(start_date) = changes.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(payment_method) = changes.payment_method {
            active.payment_method = ActiveValue::Set(payment_method);
        }
        if let Some(status) = changes.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(rating) = changes.rating {
            active.rating = ActiveValue::Set(Some(rating));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.conn).await
    }
}
