use super::*;

/// Tests updating a car overwrites its descriptive fields.
///
/// Expected: Ok with new field values persisted
#[tokio::test]
async fn overwrites_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::CarFactory::new(db)
        .brand("Toyota")
        .name("Avanza")
        .stock(3)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(
            car,
            UpdateCarParams {
                brand: "Daihatsu".to_string(),
                name: "Xenia".to_string(),
                price: 300_000.0,
                seats: 7,
                transmission: Transmission::Manual,
                stock: 4,
                image: Some("new.png".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.brand, "Daihatsu");
    assert_eq!(updated.name, "Xenia");
    assert_eq!(updated.stock, 4);
    assert_eq!(updated.image.as_deref(), Some("new.png"));

    Ok(())
}

/// Tests deleting a car.
///
/// Expected: one row deleted, car gone, second delete reports zero rows
#[tokio::test]
async fn delete_removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car(db).await?;

    let repo = CarRepository::new(db);
    assert_eq!(repo.delete(car.id).await?, 1);
    assert!(repo.find_by_id(car.id).await?.is_none());
    assert_eq!(repo.delete(car.id).await?, 0);

    Ok(())
}
