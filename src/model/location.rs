use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/admin/locations`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
}

/// Request body for `PUT /api/admin/locations/{id}`. Missing fields keep their
/// stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

/// Rental location as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<entity::location::Model> for LocationDto {
    fn from(location: entity::location::Model) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}
