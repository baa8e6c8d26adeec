use entity::car::Transmission;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/admin/cars`.
///
/// `image` is an optional base64-encoded picture, with or without a
/// `data:image/...` prefix; it is decoded and written to the image store.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarDto {
    #[validate(length(min = 1, max = 255, message = "Brand must be between 1 and 255 characters"))]
    pub brand: String,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "Seat count must be at least 1"))]
    pub seats: i32,
    pub transmission: Transmission,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
    pub image: Option<String>,
}

/// Request body for `PUT /api/admin/cars/{id}`.
///
/// All descriptive fields are required; a missing `image` keeps the stored one.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarDto {
    #[validate(length(min = 1, max = 255, message = "Brand must be between 1 and 255 characters"))]
    pub brand: String,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "Seat count must be at least 1"))]
    pub seats: i32,
    pub transmission: Transmission,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
    pub image: Option<String>,
}

/// Car as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarDto {
    pub id: i32,
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub seats: i32,
    pub transmission: Transmission,
    pub stock: i32,
    pub image: Option<String>,
}

impl From<entity::car::Model> for CarDto {
    fn from(car: entity::car::Model) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            name: car.name,
            price: car.price,
            seats: car.seats,
            transmission: car.transmission,
            stock: car.stock,
            image: car.image,
        }
    }
}

/// Parameters for inserting a new car row.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub seats: i32,
    pub transmission: Transmission,
    pub stock: i32,
    /// Stored image path, already written to the image store.
    pub image: Option<String>,
}

/// Parameters for updating an existing car row.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub seats: i32,
    pub transmission: Transmission,
    pub stock: i32,
    /// Stored image path after any replacement has been resolved.
    pub image: Option<String>,
}
