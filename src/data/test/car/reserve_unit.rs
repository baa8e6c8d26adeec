use super::*;

/// Tests reserving a unit decrements stock by exactly one.
///
/// Expected: Ok(true) and stock reduced from 3 to 2
#[tokio::test]
async fn decrements_stock_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car_with_stock(db, 3).await?;

    let repo = CarRepository::new(db);
    let reserved = repo.reserve_unit(car.id).await?;

    assert!(reserved);
    let car = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(car.stock, 2);

    Ok(())
}

/// Tests reserving from an empty car fails without touching the row.
///
/// The conditional update must not match when stock is 0, so stock can never
/// go negative.
///
/// Expected: Ok(false) and stock still 0
#[tokio::test]
async fn refuses_when_stock_is_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car_with_stock(db, 0).await?;

    let repo = CarRepository::new(db);
    let reserved = repo.reserve_unit(car.id).await?;

    assert!(!reserved);
    let car = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(car.stock, 0);

    Ok(())
}

/// Tests draining stock one reservation at a time.
///
/// Reserving exactly `stock` times succeeds; the next attempt fails and stock
/// ends at 0, never below.
///
/// Expected: two Ok(true), then Ok(false), stock 0
#[tokio::test]
async fn drains_to_zero_and_stops() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car_with_stock(db, 2).await?;

    let repo = CarRepository::new(db);
    assert!(repo.reserve_unit(car.id).await?);
    assert!(repo.reserve_unit(car.id).await?);
    assert!(!repo.reserve_unit(car.id).await?);

    let car = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(car.stock, 0);

    Ok(())
}

/// Tests reserving against an unknown car id.
///
/// Expected: Ok(false), nothing to match
#[tokio::test]
async fn refuses_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let reserved = repo.reserve_unit(999_999).await?;

    assert!(!reserved);

    Ok(())
}
