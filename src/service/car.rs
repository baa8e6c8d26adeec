use sea_orm::DatabaseConnection;

use crate::{
    data::car::CarRepository,
    error::AppError,
    model::car::{CarDto, CreateCarDto, CreateCarParams, UpdateCarDto, UpdateCarParams},
    service::image::ImageStore,
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Lists the whole vehicle catalog.
    pub async fn list(&self) -> Result<Vec<CarDto>, AppError> {
        let cars = CarRepository::new(self.db).get_all().await?;
        Ok(cars.into_iter().map(Into::into).collect())
    }

    /// Gets a single car.
    ///
    /// # Returns
    /// - `Ok(CarDto)`: The car
    /// - `Err(AppError::NotFound)`: No car with that id
    pub async fn get(&self, car_id: i32) -> Result<CarDto, AppError> {
        let Some(car) = CarRepository::new(self.db).find_by_id(car_id).await? else {
            return Err(AppError::NotFound("Car not found.".to_string()));
        };

        Ok(car.into())
    }

    /// Adds a car to the catalog, storing its picture when one was uploaded.
    ///
    /// # Returns
    /// - `Ok(CarDto)`: The created car
    /// - `Err(AppError::BadRequest)`: The image payload was not decodable
    pub async fn create(&self, dto: CreateCarDto) -> Result<CarDto, AppError> {
        let image = match dto.image {
            Some(data) if !data.trim().is_empty() => Some(self.images.store(&data).await?),
            _ => None,
        };

        let car = CarRepository::new(self.db)
            .create(CreateCarParams {
                brand: dto.brand,
                name: dto.name,
                price: dto.price,
                seats: dto.seats,
                transmission: dto.transmission,
                stock: dto.stock,
                image,
            })
            .await?;

        Ok(car.into())
    }

    /// Updates a car, replacing its stored picture when a new one was uploaded.
    ///
    /// # Returns
    /// - `Ok(CarDto)`: The updated car
    /// - `Err(AppError::NotFound)`: No car with that id
    /// - `Err(AppError::BadRequest)`: The image payload was not decodable
    pub async fn update(&self, car_id: i32, dto: UpdateCarDto) -> Result<CarDto, AppError> {
        let car_repo = CarRepository::new(self.db);

        let Some(car) = car_repo.find_by_id(car_id).await? else {
            return Err(AppError::NotFound("Car not found.".to_string()));
        };

        let image = match dto.image {
            Some(data) if !data.trim().is_empty() => {
                let new_image = self.images.store(&data).await?;
                if let Some(old_image) = &car.image {
                    self.images.remove(old_image).await;
                }
                Some(new_image)
            }
            _ => car.image.clone(),
        };

        let car = car_repo
            .update(
                car,
                UpdateCarParams {
                    brand: dto.brand,
                    name: dto.name,
                    price: dto.price,
                    seats: dto.seats,
                    transmission: dto.transmission,
                    stock: dto.stock,
                    image,
                },
            )
            .await?;

        Ok(car.into())
    }

    /// Deletes a car and its stored picture.
    ///
    /// # Returns
    /// - `Ok(())`: The car was deleted
    /// - `Err(AppError::NotFound)`: No car with that id
    pub async fn delete(&self, car_id: i32) -> Result<(), AppError> {
        let car_repo = CarRepository::new(self.db);

        let Some(car) = car_repo.find_by_id(car_id).await? else {
            return Err(AppError::NotFound("Car not found.".to_string()));
        };

        if let Some(image) = &car.image {
            self.images.remove(image).await;
        }

        car_repo.delete(car.id).await?;

        Ok(())
    }
}
