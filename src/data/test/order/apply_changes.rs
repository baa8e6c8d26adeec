use super::*;

/// Tests applying a full set of field changes.
///
/// Expected: Ok with dates, payment method, status, and rating updated
#[tokio::test]
async fn applies_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let new_start = Utc::now().date_naive() + Duration::days(10);
    let repo = OrderRepository::new(db);
    let updated = repo
        .apply_changes(
            order,
            OrderChanges {
                start_date: Some(new_start),
                end_date: Some(new_start + Duration::days(2)),
                payment_method: Some("Kartu Kredit".to_string()),
                status: Some(OrderStatus::Completed),
                rating: Some(5),
            },
        )
        .await?;

    assert_eq!(updated.start_date, new_start);
    assert_eq!(updated.end_date, new_start + Duration::days(2));
    assert_eq!(updated.payment_method, "Kartu Kredit");
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(updated.rating, Some(5));

    Ok(())
}

/// Tests that None fields keep their stored values.
///
/// Expected: Ok with everything unchanged except the one set field
#[tokio::test]
async fn none_fields_are_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _customer, _car, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let original_start = order.start_date;
    let original_payment = order.payment_method.clone();

    let repo = OrderRepository::new(db);
    let updated = repo
        .apply_changes(
            order,
            OrderChanges {
                rating: None,
                status: Some(OrderStatus::Cancelled),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.start_date, original_start);
    assert_eq!(updated.payment_method, original_payment);
    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert!(updated.rating.is_none());

    Ok(())
}
