use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Finds a role by name, inserting it when missing.
///
/// Roles have a unique name, and most tests need the same `admin`/`customer`
/// pair, so this is find-or-create rather than a plain insert.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Role name, e.g. `entity::role::CUSTOMER`
///
/// # Returns
/// - `Ok(entity::role::Model)` - Existing or newly created role
/// - `Err(DbErr)` - Database error
pub async fn ensure_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::role::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
