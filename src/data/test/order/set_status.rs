use super::*;

/// Tests writing a new status.
///
/// Expected: Ok with the status persisted
#[tokio::test]
async fn writes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.set_status(order, OrderStatus::Confirmed).await?;

    assert_eq!(updated.status, OrderStatus::Confirmed);

    let reloaded = repo.find_by_id(updated.id).await?.unwrap();
    assert_eq!(reloaded.status, OrderStatus::Confirmed);

    Ok(())
}

/// Tests that setting the same status again still succeeds.
///
/// The coordinator relies on repeated writes being harmless at this layer.
///
/// Expected: Ok with the status unchanged
#[tokio::test]
async fn same_status_is_harmless() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.set_status(order, OrderStatus::Pending).await?;

    assert_eq!(updated.status, OrderStatus::Pending);

    Ok(())
}
