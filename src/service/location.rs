use sea_orm::DatabaseConnection;

use crate::{
    data::location::{LocationRepository, UpdateLocationParams},
    error::AppError,
    model::location::{CreateLocationDto, LocationDto, UpdateLocationDto},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all rental locations.
    pub async fn list(&self) -> Result<Vec<LocationDto>, AppError> {
        let locations = LocationRepository::new(self.db).get_all().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    /// Gets a single rental location.
    ///
    /// # Returns
    /// - `Ok(LocationDto)`: The location
    /// - `Err(AppError::NotFound)`: No location with that id
    pub async fn get(&self, location_id: i32) -> Result<LocationDto, AppError> {
        let Some(location) = LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
        else {
            return Err(AppError::NotFound("Location not found.".to_string()));
        };

        Ok(location.into())
    }

    /// Adds a rental location.
    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationDto, AppError> {
        let location = LocationRepository::new(self.db)
            .create(dto.name, dto.latitude, dto.longitude)
            .await?;

        Ok(location.into())
    }

    /// Updates a rental location; missing fields keep their stored values.
    ///
    /// # Returns
    /// - `Ok(LocationDto)`: The updated location
    /// - `Err(AppError::NotFound)`: No location with that id
    pub async fn update(
        &self,
        location_id: i32,
        dto: UpdateLocationDto,
    ) -> Result<LocationDto, AppError> {
        let location_repo = LocationRepository::new(self.db);

        let Some(location) = location_repo.find_by_id(location_id).await? else {
            return Err(AppError::NotFound("Location not found.".to_string()));
        };

        let location = location_repo
            .update(
                location,
                UpdateLocationParams {
                    name: dto.name,
                    latitude: dto.latitude,
                    longitude: dto.longitude,
                },
            )
            .await?;

        Ok(location.into())
    }

    /// Deletes a rental location.
    ///
    /// # Returns
    /// - `Ok(())`: The location was deleted
    /// - `Err(AppError::NotFound)`: No location with that id
    pub async fn delete(&self, location_id: i32) -> Result<(), AppError> {
        let deleted = LocationRepository::new(self.db).delete(location_id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Location not found.".to_string()));
        }

        Ok(())
    }
}
