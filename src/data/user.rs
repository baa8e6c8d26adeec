use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::model::user::CreateUserParams;
use entity::user::AccountStatus;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error (including unique email violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role_id: ActiveValue::Set(params.role_id),
            account_status: ActiveValue::Set(params.account_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by their unique email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user together with their role.
    ///
    /// The role is optional in the return type because of the outer join, but a
    /// user row always references an existing role.
    ///
    /// # Returns
    /// - `Ok(Some((user, role)))`: User and their role
    /// - `Ok(None)`: No user with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_with_role(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await
    }

    /// Loads users by id into a lookup map.
    ///
    /// # Returns
    /// - `Ok(map)`: user id -> user, missing ids are simply absent
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether the configured bootstrap admin
    /// account needs to be created.
    ///
    /// # Returns
    /// - `Ok(true)`: At least one admin user exists
    /// - `Ok(false)`: No admin users exist
    /// - `Err(DbErr)`: Database error
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::Role.def())
            .filter(entity::role::Column::Name.eq(entity::role::ADMIN))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Updates a user's account verification status.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr)`: Database error
    pub async fn set_account_status(
        &self,
        user: entity::user::Model,
        account_status: AccountStatus,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.account_status = ActiveValue::Set(account_status);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }
}
