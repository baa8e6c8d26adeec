use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a role by its unique name.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The role
    /// - `Ok(None)`: No role with that name
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Finds a role by name, inserting it when missing.
    ///
    /// Used by startup seeding; role names are unique so this is idempotent.
    ///
    /// # Returns
    /// - `Ok(Model)`: Existing or newly created role
    /// - `Err(DbErr)`: Database error
    pub async fn ensure(&self, name: &str) -> Result<entity::role::Model, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
