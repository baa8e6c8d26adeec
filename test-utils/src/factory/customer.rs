use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::customer::IdentityType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customer rows linked to an existing user.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    address: Option<String>,
    identity_type: Option<IdentityType>,
    identity_number: Option<String>,
    identity_image: Option<String>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Customer {id}"` where id is auto-incremented
    /// - address / identity fields: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user this customer row belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Customer {}", id),
            address: None,
            identity_type: None,
            identity_number: None,
            identity_image: None,
        }
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the customer address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the identity document type and number.
    pub fn identity(mut self, identity_type: IdentityType, number: impl Into<String>) -> Self {
        self.identity_type = Some(identity_type);
        self.identity_number = Some(number.into());
        self
    }

    /// Sets the base64 identity document image.
    pub fn identity_image(mut self, image: impl Into<String>) -> Self {
        self.identity_image = Some(image.into());
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now();
        entity::customer::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            identity_type: ActiveValue::Set(self.identity_type),
            identity_number: ActiveValue::Set(self.identity_number),
            identity_image: ActiveValue::Set(self.identity_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer row with default values for the given user.
pub async fn create_customer(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db, user_id).build().await
}
