use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::car::Transmission;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .brand("Toyota")
///     .stock(0)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    brand: String,
    name: String,
    price: f64,
    seats: i32,
    transmission: Transmission,
    stock: i32,
    image: Option<String>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Brand {id}"` where id is auto-incremented
    /// - name: `"Car {id}"`
    /// - price: `350000.0`
    /// - seats: `4`
    /// - transmission: `Manual`
    /// - stock: `3`
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            brand: format!("Brand {}", id),
            name: format!("Car {}", id),
            price: 350_000.0,
            seats: 4,
            transmission: Transmission::Manual,
            stock: 3,
            image: None,
        }
    }

    /// Sets the car brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the car model name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily rental price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the seat count.
    pub fn seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the transmission type.
    pub fn transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = transmission;
        self
    }

    /// Sets the available stock count.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Sets the stored image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        entity::car::ActiveModel {
            brand: ActiveValue::Set(self.brand),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            seats: ActiveValue::Set(self.seats),
            transmission: ActiveValue::Set(self.transmission),
            stock: ActiveValue::Set(self.stock),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}

/// Creates a car with a specific stock count.
pub async fn create_car_with_stock(
    db: &DatabaseConnection,
    stock: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).stock(stock).build().await
}
