use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new message.
    pub async fn create(
        &self,
        sender_id: i32,
        receiver_id: i32,
        body: String,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists every message, oldest first.
    pub async fn get_all(&self) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .order_by_asc(entity::message::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists a user's conversation history (sent or received), oldest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(
                Condition::any()
                    .add(entity::message::Column::SenderId.eq(user_id))
                    .add(entity::message::Column::ReceiverId.eq(user_id)),
            )
            .order_by_asc(entity::message::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
