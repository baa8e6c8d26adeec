//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer account: the `customer` role (if missing), a user with
/// that role, and the linked customer row.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, customer))` - Created user and customer entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_customer_account(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::customer::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db).build().await?;
    let customer = crate::factory::customer::create_customer(db, user.id).await?;

    Ok((user, customer))
}

/// Creates an admin account: the `admin` role (if missing) and a user with it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(user)` - Created admin user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_admin_account(
    db: &DatabaseConnection,
) -> Result<entity::user::Model, DbErr> {
    crate::factory::user::UserFactory::new(db).admin().build().await
}

/// Creates an order together with everything it references.
///
/// This is a convenience method that creates:
/// 1. Customer account (role + user + customer row)
/// 2. Car
/// 3. Order in `Pending` status
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, customer, car, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::customer::Model,
        entity::car::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (user, customer) = create_customer_account(db).await?;
    let car = crate::factory::car::create_car(db).await?;
    let order = crate::factory::order::create_order(db, user.id, car.id).await?;

    Ok((user, customer, car, order))
}
