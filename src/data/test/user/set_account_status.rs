use super::*;

/// Tests flipping an account from unverified to verified.
///
/// Expected: Ok with the status persisted
#[tokio::test]
async fn verifies_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    assert_eq!(user.account_status, AccountStatus::Unverified);

    let repo = UserRepository::new(db);
    let updated = repo.set_account_status(user, AccountStatus::Verified).await?;

    assert_eq!(updated.account_status, AccountStatus::Verified);

    let reloaded = repo.find_by_id(updated.id).await?.unwrap();
    assert_eq!(reloaded.account_status, AccountStatus::Verified);

    Ok(())
}
