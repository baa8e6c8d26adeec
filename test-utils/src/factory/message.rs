use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a message between two existing users.
///
/// # Arguments
/// - `db` - Database connection
/// - `sender_id` - Id of the sending user
/// - `receiver_id` - Id of the receiving user
/// - `body` - Message text
///
/// # Returns
/// - `Ok(entity::message::Model)` - Created message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    sender_id: i32,
    receiver_id: i32,
    body: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        sender_id: ActiveValue::Set(sender_id),
        receiver_id: ActiveValue::Set(receiver_id),
        body: ActiveValue::Set(body.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
