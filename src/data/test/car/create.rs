use super::*;

/// Tests creating a new car.
///
/// Verifies that the repository inserts a car with all descriptive fields and
/// the requested initial stock.
///
/// Expected: Ok with car created
#[tokio::test]
async fn creates_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CreateCarParams {
            brand: "Toyota".to_string(),
            name: "Avanza".to_string(),
            price: 350_000.0,
            seats: 7,
            transmission: Transmission::Matic,
            stock: 3,
            image: None,
        })
        .await?;

    assert_eq!(car.brand, "Toyota");
    assert_eq!(car.name, "Avanza");
    assert_eq!(car.seats, 7);
    assert_eq!(car.transmission, Transmission::Matic);
    assert_eq!(car.stock, 3);
    assert!(car.image.is_none());

    Ok(())
}

/// Tests creating a car with a stored image path.
///
/// Expected: Ok with the image path persisted
#[tokio::test]
async fn creates_car_with_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CreateCarParams {
            brand: "Honda".to_string(),
            name: "Brio".to_string(),
            price: 250_000.0,
            seats: 5,
            transmission: Transmission::Manual,
            stock: 1,
            image: Some("abc123.jpg".to_string()),
        })
        .await?;

    assert_eq!(car.image.as_deref(), Some("abc123.jpg"));

    Ok(())
}
