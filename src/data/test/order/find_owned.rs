use super::*;

/// Tests the owner can look up their own order.
///
/// Expected: Ok(Some) for the owner
#[tokio::test]
async fn returns_order_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_owned(order.id, user.id).await?;

    assert_eq!(found.map(|o| o.id), Some(order.id));

    Ok(())
}

/// Tests another user's order is invisible.
///
/// `find_owned` must return None for a foreign order so the API responds 404
/// instead of leaking order existence.
///
/// Expected: Ok(None) for a non-owner
#[tokio::test]
async fn hides_order_from_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let (stranger, _their_customer) = factory::helpers::create_customer_account(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_owned(order.id, stranger.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests looking up an owned order together with its car.
///
/// Expected: Ok(Some((order, Some(car))))
#[tokio::test]
async fn returns_order_with_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _customer, car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_owned_with_car(order.id, user.id).await?;

    let (found_order, found_car) = found.unwrap();
    assert_eq!(found_order.id, order.id);
    assert_eq!(found_car.map(|c| c.id), Some(car.id));

    Ok(())
}
