use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::model::customer::UpdateProfileParams;
use entity::customer::IdentityType;

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the customer row that accompanies a newly registered user.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created customer
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
    ) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now();
        entity::customer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the customer row belonging to a user.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Finds a customer by id together with their user account.
    pub async fn find_by_id_with_user(
        &self,
        customer_id: i32,
    ) -> Result<Option<(entity::customer::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Lists all customers together with their user accounts.
    pub async fn get_all_with_user(
        &self,
    ) -> Result<Vec<(entity::customer::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Customer::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Loads customers keyed by their user id.
    ///
    /// # Returns
    /// - `Ok(map)`: user id -> customer, users without a customer row are absent
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, entity::customer::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let customers = entity::prelude::Customer::find()
            .filter(entity::customer::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(customers
            .into_iter()
            .map(|customer| (customer.user_id, customer))
            .collect())
    }

    /// Applies profile field changes; `None` fields keep their stored values.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated customer
    /// - `Err(DbErr)`: Database error
    pub async fn update_profile(
        &self,
        customer: entity::customer::Model,
        params: UpdateProfileParams,
    ) -> Result<entity::customer::Model, DbErr> {
        let mut active: entity::customer::ActiveModel = customer.into();
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(identity_type) = params.identity_type {
            active.identity_type = ActiveValue::Set(Some(identity_type));
        }
        if let Some(identity_number) = params.identity_number {
            active.identity_number = ActiveValue::Set(Some(identity_number));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Stores an uploaded identity document on the customer row.
    ///
    /// # Arguments
    /// - `customer`: The customer row to update
    /// - `identity_type`: Kind of document (KTP or SIM)
    /// - `image`: Base64-encoded document image
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated customer
    /// - `Err(DbErr)`: Database error
    pub async fn set_identity(
        &self,
        customer: entity::customer::Model,
        identity_type: IdentityType,
        image: String,
    ) -> Result<entity::customer::Model, DbErr> {
        let mut active: entity::customer::ActiveModel = customer.into();
        active.identity_type = ActiveValue::Set(Some(identity_type));
        active.identity_image = ActiveValue::Set(Some(image));
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }
}
