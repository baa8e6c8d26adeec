use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthedUser,
    model::message::SendMessageDto,
    service::message::MessageService,
};

fn as_authed(user: entity::user::Model, role: &str) -> AuthedUser {
    AuthedUser {
        user,
        role: role.to_string(),
    }
}

/// Tests a customer messaging an admin.
///
/// Expected: Ok with the message stored
#[tokio::test]
async fn customer_can_message_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer_user, _customer) = factory::helpers::create_customer_account(db).await?;
    let admin = factory::helpers::create_admin_account(db).await?;

    let service = MessageService::new(db);
    let message = service
        .send(
            &as_authed(customer_user, entity::role::CUSTOMER),
            SendMessageDto {
                receiver_id: admin.id,
                body: "Halo admin, saya ada pertanyaan.".to_string(),
            },
        )
        .await?;

    assert_eq!(message.receiver_id, admin.id);
    assert_eq!(message.body, "Halo admin, saya ada pertanyaan.");

    Ok(())
}

/// Tests a customer messaging another customer.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn customer_cannot_message_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _sender_customer) = factory::helpers::create_customer_account(db).await?;
    let (receiver, _receiver_customer) = factory::helpers::create_customer_account(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send(
            &as_authed(sender, entity::role::CUSTOMER),
            SendMessageDto {
                receiver_id: receiver.id,
                body: "Psst".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin replying to a customer.
///
/// Expected: Ok; the customer-to-admin restriction does not apply to admins
#[tokio::test]
async fn admin_can_message_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::helpers::create_admin_account(db).await?;
    let (customer_user, _customer) = factory::helpers::create_customer_account(db).await?;

    let service = MessageService::new(db);
    let message = service
        .send(
            &as_authed(admin, entity::role::ADMIN),
            SendMessageDto {
                receiver_id: customer_user.id,
                body: "Pesanan Anda sedang diproses.".to_string(),
            },
        )
        .await?;

    assert_eq!(message.receiver_id, customer_user.id);

    Ok(())
}

/// Tests sending a message to oneself.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn self_messaging_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::helpers::create_admin_account(db).await?;
    let admin_id = admin.id;

    let service = MessageService::new(db);
    let result = service
        .send(
            &as_authed(admin, entity::role::ADMIN),
            SendMessageDto {
                receiver_id: admin_id,
                body: "Note to self".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests sending to a receiver that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_receiver_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::helpers::create_admin_account(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send(
            &as_authed(admin, entity::role::ADMIN),
            SendMessageDto {
                receiver_id: 999_999,
                body: "Anyone there?".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the history view resolves both parties of each message.
///
/// Expected: sender and receiver summaries embedded, oldest first
#[tokio::test]
async fn history_embeds_both_parties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer_user, _customer) = factory::helpers::create_customer_account(db).await?;
    let admin = factory::helpers::create_admin_account(db).await?;

    factory::message::create_message(db, customer_user.id, admin.id, "Halo").await?;
    factory::message::create_message(db, admin.id, customer_user.id, "Halo juga").await?;

    let service = MessageService::new(db);
    let history = service.list_for_user(customer_user.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(
        history[0].sender.as_ref().map(|s| s.id),
        Some(customer_user.id)
    );
    assert_eq!(history[0].receiver.as_ref().map(|r| r.id), Some(admin.id));
    assert_eq!(history[1].sender.as_ref().map(|s| s.id), Some(admin.id));

    Ok(())
}
