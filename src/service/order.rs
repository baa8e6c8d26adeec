//! Order lifecycle and the order/inventory coordinator.
//!
//! This is the only component with multi-entity invariants: car stock must stay
//! consistent with the set of currently-confirmed orders. Every status
//! transition runs inside a single transaction, and the stock decrement is a
//! conditional update, so stock and status change atomically together or not
//! at all.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{car::CarRepository, customer::CustomerRepository, order::OrderRepository},
    error::{order::OrderError, AppError},
    model::order::{
        AdminOrderDto, AdminOrderUserDto, CreateOrderDto, CreateOrderParams, OrderChanges,
        OrderDto, OrderWithCarDto, UpdateOrderDto,
    },
};
use entity::order::OrderStatus;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new order in `Pending` status.
    ///
    /// The car must exist and have stock available, but no unit is reserved
    /// yet; reservation happens at confirmation.
    ///
    /// # Returns
    /// - `Ok(OrderWithCarDto)`: The created order with its car
    /// - `Err(AppError::NotFound)`: Car does not exist
    /// - `Err(AppError::OrderErr(InsufficientStock))`: Car has no stock left
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateOrderDto,
    ) -> Result<OrderWithCarDto, AppError> {
        let car_repo = CarRepository::new(self.db);

        let Some(car) = car_repo.find_by_id(dto.car_id).await? else {
            return Err(AppError::NotFound("Car not found.".to_string()));
        };

        if car.stock < 1 {
            return Err(OrderError::InsufficientStock.into());
        }

        let order = OrderRepository::new(self.db)
            .create(
                user_id,
                CreateOrderParams {
                    car_id: dto.car_id,
                    start_date: dto.start_date,
                    end_date: dto.end_date,
                    payment_method: dto.payment_method,
                },
            )
            .await?;

        Ok(OrderWithCarDto {
            order: order.into(),
            car: car.into(),
        })
    }

    /// Lists the orders belonging to a user, newest first, with their cars.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<OrderWithCarDto>, AppError> {
        let orders = OrderRepository::new(self.db)
            .get_for_user_with_car(user_id)
            .await?;

        Ok(orders
            .into_iter()
            .filter_map(|(order, car)| {
                car.map(|car| OrderWithCarDto {
                    order: order.into(),
                    car: car.into(),
                })
            })
            .collect())
    }

    /// Gets one of the user's own orders with its car.
    ///
    /// # Returns
    /// - `Ok(OrderWithCarDto)`: The order
    /// - `Err(AppError::NotFound)`: Order missing or owned by someone else
    pub async fn get_owned(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<OrderWithCarDto, AppError> {
        let Some((order, car)) = OrderRepository::new(self.db)
            .find_owned_with_car(order_id, user_id)
            .await?
        else {
            return Err(AppError::NotFound(
                "Order not found or you do not have permission to view it.".to_string(),
            ));
        };

        let car = car.ok_or_else(|| {
            AppError::InternalError(format!("Order {} references a missing car", order_id))
        })?;

        Ok(OrderWithCarDto {
            order: order.into(),
            car: car.into(),
        })
    }

    /// Lists every order with account, customer profile, and car data embedded.
    pub async fn list_all(&self) -> Result<Vec<AdminOrderDto>, AppError> {
        let orders = OrderRepository::new(self.db).get_all_with_user().await?;

        let car_ids: Vec<i32> = orders.iter().map(|(order, _)| order.car_id).collect();
        let user_ids: Vec<i32> = orders
            .iter()
            .filter_map(|(_, user)| user.as_ref().map(|user| user.id))
            .collect();

        let cars = CarRepository::new(self.db).find_by_ids(&car_ids).await?;
        let customers = CustomerRepository::new(self.db)
            .find_by_user_ids(&user_ids)
            .await?;

        Ok(orders
            .into_iter()
            .filter_map(|(order, user)| {
                let user = user?;
                let car = cars.get(&order.car_id).cloned()?;
                let customer = customers.get(&user.id).cloned();

                Some(AdminOrderDto {
                    order: order.into(),
                    user: AdminOrderUserDto {
                        account_status: user.account_status,
                        customer: customer.map(Into::into),
                        user: user.into(),
                    },
                    car: car.into(),
                })
            })
            .collect())
    }

    /// Applies a customer's changes to their own order.
    ///
    /// Rules, all checked against the order's current status:
    /// - Date and payment edits are honored only while the order is `Pending`
    ///   (silently ignored otherwise).
    /// - A rating may be attached only while the order is `Selesai`, and
    ///   overwrites any previous rating.
    /// - The only status a customer may request is `Dibatalkan`, and only from
    ///   `Pending` or `Dikonfirmasi`. Cancelling a confirmed order releases its
    ///   reserved stock unit; cancelling a pending order leaves stock untouched.
    ///
    /// Runs in a transaction so the stock release and the status write land
    /// together or not at all.
    ///
    /// # Returns
    /// - `Ok(OrderWithCarDto)`: The updated order with its car
    /// - `Err(AppError::NotFound)`: Order missing or owned by someone else
    /// - `Err(AppError::OrderErr(_))`: A business rule rejected the change
    pub async fn update_for_customer(
        &self,
        order_id: i32,
        user_id: i32,
        dto: UpdateOrderDto,
    ) -> Result<OrderWithCarDto, AppError> {
        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);
        let car_repo = CarRepository::new(&txn);

        let Some(order) = order_repo.find_owned(order_id, user_id).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound(
                "Order not found or you do not have permission to update it.".to_string(),
            ));
        };

        let mut changes = OrderChanges::default();

        // Date and payment edits are only honored while the order is pending.
        if order.status == OrderStatus::Pending {
            changes.start_date = dto.start_date;
            changes.end_date = dto.end_date;
            changes.payment_method = dto.payment_method;
        }

        if let Some(rating) = dto.rating {
            if order.status != OrderStatus::Completed {
                txn.rollback().await?;
                return Err(OrderError::RatingRequiresCompleted.into());
            }
            changes.rating = Some(rating);
        }

        if let Some(requested) = dto.status {
            if requested != OrderStatus::Cancelled {
                txn.rollback().await?;
                return Err(OrderError::CustomerStatusNotAllowed.into());
            }

            match order.status {
                // A pending order never reserved a unit, so nothing to release.
                OrderStatus::Pending => {}
                OrderStatus::Confirmed => car_repo.release_unit(order.car_id).await?,
                from => {
                    txn.rollback().await?;
                    return Err(OrderError::InvalidTransition { from, requested }.into());
                }
            }

            changes.status = Some(requested);
        }

        order_repo.apply_changes(order, changes).await?;
        txn.commit().await?;

        self.get_owned(order_id, user_id).await
    }

    /// The order/inventory coordinator: applies an admin status transition and
    /// keeps car stock consistent with the set of confirmed orders.
    ///
    /// - To `Dikonfirmasi` from any non-confirmed state: reserves one unit via
    ///   a conditional decrement; fails with insufficient-stock when no unit is
    ///   left, changing nothing.
    /// - From `Dikonfirmasi` to `Dibatalkan` or `Selesai`: releases the unit.
    /// - Every other transition leaves stock untouched, so repeated calls with
    ///   the same target status are no-ops with respect to stock.
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The updated order
    /// - `Err(AppError::NotFound)`: Order or car does not exist
    /// - `Err(AppError::OrderErr(InsufficientStock))`: No unit left to reserve
    pub async fn update_status(
        &self,
        order_id: i32,
        new_status: OrderStatus,
    ) -> Result<OrderDto, AppError> {
        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);
        let car_repo = CarRepository::new(&txn);

        let Some(order) = order_repo.find_by_id(order_id).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound("Order not found.".to_string()));
        };

        let Some(car) = car_repo.find_by_id(order.car_id).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound("Car not found.".to_string()));
        };

        let old_status = order.status;

        if old_status != OrderStatus::Confirmed && new_status == OrderStatus::Confirmed {
            if !car_repo.reserve_unit(car.id).await? {
                txn.rollback().await?;
                return Err(OrderError::InsufficientStock.into());
            }
        }

        if old_status == OrderStatus::Confirmed
            && matches!(new_status, OrderStatus::Cancelled | OrderStatus::Completed)
        {
            car_repo.release_unit(car.id).await?;
        }

        let updated = order_repo.set_status(order, new_status).await?;
        txn.commit().await?;

        Ok(updated.into())
    }
}
