use super::*;

/// Tests the conversation history covers both directions.
///
/// A user's history must include messages they sent and messages they
/// received, oldest first, and nothing from conversations they are not part of.
///
/// Expected: both directions present, foreign message absent
#[tokio::test]
async fn includes_sent_and_received() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer_user, _customer) = factory::helpers::create_customer_account(db).await?;
    let admin = factory::helpers::create_admin_account(db).await?;
    let (other_user, _other_customer) = factory::helpers::create_customer_account(db).await?;

    let first = factory::message::create_message(db, customer_user.id, admin.id, "Halo").await?;
    let second = factory::message::create_message(db, admin.id, customer_user.id, "Halo juga").await?;
    factory::message::create_message(db, other_user.id, admin.id, "Unrelated").await?;

    let repo = MessageRepository::new(db);
    let history = repo.get_for_user(customer_user.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, first.id);
    assert_eq!(history[1].id, second.id);

    Ok(())
}

/// Tests a user with no messages gets an empty history.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_for_user_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _customer) = factory::helpers::create_customer_account(db).await?;

    let repo = MessageRepository::new(db);
    let history = repo.get_for_user(user.id).await?;

    assert!(history.is_empty());

    Ok(())
}
