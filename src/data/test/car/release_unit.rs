use super::*;

/// Tests releasing a unit increments stock by exactly one.
///
/// Expected: stock raised from 1 to 2
#[tokio::test]
async fn increments_stock_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car_with_stock(db, 1).await?;

    let repo = CarRepository::new(db);
    repo.release_unit(car.id).await?;

    let car = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(car.stock, 2);

    Ok(())
}

/// Tests a reserve followed by a release restores the original stock.
///
/// Expected: stock back at its starting value
#[tokio::test]
async fn release_undoes_reserve() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car_with_stock(db, 5).await?;

    let repo = CarRepository::new(db);
    assert!(repo.reserve_unit(car.id).await?);
    repo.release_unit(car.id).await?;

    let car = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(car.stock, 5);

    Ok(())
}
