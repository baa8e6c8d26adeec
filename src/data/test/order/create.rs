use super::*;

/// Tests creating a new order.
///
/// Verifies that a freshly inserted order starts in `Pending` status with no
/// rating, regardless of what happens later in the lifecycle.
///
/// Expected: Ok with a pending, unrated order
#[tokio::test]
async fn creates_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _customer) = factory::helpers::create_customer_account(db).await?;
    let car = factory::car::create_car(db).await?;

    let start = Utc::now().date_naive() + Duration::days(2);
    let repo = OrderRepository::new(db);
    let order = repo
        .create(
            user.id,
            CreateOrderParams {
                car_id: car.id,
                start_date: start,
                end_date: start + Duration::days(3),
                payment_method: "Transfer Bank".to_string(),
            },
        )
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.car_id, car.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_method, "Transfer Bank");
    assert!(order.rating.is_none());

    Ok(())
}

/// Tests foreign key constraint on car_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _customer) = factory::helpers::create_customer_account(db).await?;

    let start = Utc::now().date_naive() + Duration::days(2);
    let repo = OrderRepository::new(db);
    let result = repo
        .create(
            user.id,
            CreateOrderParams {
                car_id: 999_999,
                start_date: start,
                end_date: start + Duration::days(1),
                payment_method: "Transfer Bank".to_string(),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
