use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Field changes for a location update; `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocationParams {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new rental location.
    pub async fn create(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();
        entity::location::ActiveModel {
            name: ActiveValue::Set(name),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists all locations ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a location by id.
    pub async fn find_by_id(
        &self,
        location_id: i32,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await
    }

    /// Applies location field changes.
    pub async fn update(
        &self,
        location: entity::location::Model,
        params: UpdateLocationParams,
    ) -> Result<entity::location::Model, DbErr> {
        let mut active: entity::location::ActiveModel = location.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(latitude) = params.latitude {
            active.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active.longitude = ActiveValue::Set(longitude);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Deletes a location by id.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows deleted (0 when the location did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, location_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Location::delete_by_id(location_id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
