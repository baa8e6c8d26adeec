use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::model::car::{CreateCarParams, UpdateCarParams};

/// Repository for the vehicle catalog.
///
/// Generic over the connection so stock adjustments can run on the transaction
/// opened by the order/inventory coordinator.
pub struct CarRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new car.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created car
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        entity::car::ActiveModel {
            brand: ActiveValue::Set(params.brand),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            seats: ActiveValue::Set(params.seats),
            transmission: ActiveValue::Set(params.transmission),
            stock: ActiveValue::Set(params.stock),
            image: ActiveValue::Set(params.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Lists the whole catalog ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::Id)
            .all(self.conn)
            .await
    }

    /// Finds a car by id.
    pub async fn find_by_id(&self, car_id: i32) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find_by_id(car_id).one(self.conn).await
    }

    /// Loads cars by id into a lookup map.
    pub async fn find_by_ids(
        &self,
        car_ids: &[i32],
    ) -> Result<HashMap<i32, entity::car::Model>, DbErr> {
        if car_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(car_ids.iter().copied()))
            .all(self.conn)
            .await?;

        Ok(cars.into_iter().map(|car| (car.id, car)).collect())
    }

    /// Overwrites a car's descriptive fields.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated car
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        car: entity::car::Model,
        params: UpdateCarParams,
    ) -> Result<entity::car::Model, DbErr> {
        let mut active: entity::car::ActiveModel = car.into();
        active.brand = ActiveValue::Set(params.brand);
        active.name = ActiveValue::Set(params.name);
        active.price = ActiveValue::Set(params.price);
        active.seats = ActiveValue::Set(params.seats);
        active.transmission = ActiveValue::Set(params.transmission);
        active.stock = ActiveValue::Set(params.stock);
        active.image = ActiveValue::Set(params.image);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.conn).await
    }

    /// Deletes a car by id.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows deleted (0 when the car did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, car_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::delete_by_id(car_id)
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Reserves one unit of stock for a confirmation.
    ///
    /// Runs a conditional decrement (`stock = stock - 1 WHERE stock > 0`) so two
    /// concurrent confirmations cannot both take the last unit; the caller must
    /// treat `false` as insufficient stock and abort its transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: A unit was reserved
    /// - `Ok(false)`: Stock was already 0, nothing changed
    /// - `Err(DbErr)`: Database error
    pub async fn reserve_unit(&self, car_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::update_many()
            .col_expr(
                entity::car::Column::Stock,
                Expr::col(entity::car::Column::Stock).sub(1),
            )
            .filter(entity::car::Column::Id.eq(car_id))
            .filter(entity::car::Column::Stock.gt(0))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Releases one unit of stock when a confirmed order is cancelled or completed.
    ///
    /// # Returns
    /// - `Ok(())`: The unit was returned to stock
    /// - `Err(DbErr)`: Database error
    pub async fn release_unit(&self, car_id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::update_many()
            .col_expr(
                entity::car::Column::Stock,
                Expr::col(entity::car::Column::Stock).add(1),
            )
            .filter(entity::car::Column::Id.eq(car_id))
            .exec(self.conn)
            .await?;

        Ok(())
    }
}
