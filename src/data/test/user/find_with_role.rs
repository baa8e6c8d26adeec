use super::*;

/// Tests loading a user together with their role.
///
/// Expected: Ok(Some((user, Some(role)))) with the role name resolved
#[tokio::test]
async fn resolves_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (found, role) = repo.find_with_role(user.id).await?.unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(role.map(|r| r.name), Some(entity::role::CUSTOMER.to_string()));

    Ok(())
}

/// Tests looking up an unknown user id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_with_role(999_999).await?;

    assert!(found.is_none());

    Ok(())
}
