use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{message::MessageRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::AuthedUser,
    model::message::{MessageDto, MessageWithUsersDto, SendMessageDto},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a message from the authenticated user.
    ///
    /// Rules:
    /// - The receiver must exist.
    /// - Nobody can message themselves.
    /// - Customers can only message admins; admins can message anyone.
    ///
    /// # Returns
    /// - `Ok(MessageDto)`: The stored message
    /// - `Err(AppError::NotFound)`: Receiver does not exist
    /// - `Err(AppError::BadRequest)`: Sender and receiver are the same user
    /// - `Err(AppError::AuthErr(AccessDenied))`: Customer messaging a non-admin
    pub async fn send(
        &self,
        sender: &AuthedUser,
        dto: SendMessageDto,
    ) -> Result<MessageDto, AppError> {
        let Some((receiver, receiver_role)) = UserRepository::new(self.db)
            .find_with_role(dto.receiver_id)
            .await?
        else {
            return Err(AppError::NotFound(
                "Message receiver not found.".to_string(),
            ));
        };

        if sender.user.id == receiver.id {
            return Err(AppError::BadRequest(
                "You cannot send a message to yourself.".to_string(),
            ));
        }

        let receiver_role = receiver_role.ok_or_else(|| {
            AppError::InternalError(format!("User {} references a missing role", receiver.id))
        })?;

        if sender.is_customer() && receiver_role.name != entity::role::ADMIN {
            return Err(AuthError::AccessDenied(
                sender.user.id,
                "Customer attempted to message a non-admin user".to_string(),
            )
            .into());
        }

        let message = MessageRepository::new(self.db)
            .create(sender.user.id, receiver.id, dto.body)
            .await?;

        Ok(message.into())
    }

    /// Lists a user's conversation history, oldest first, with both parties
    /// embedded.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<MessageWithUsersDto>, AppError> {
        let messages = MessageRepository::new(self.db).get_for_user(user_id).await?;
        self.with_users(messages).await
    }

    /// Lists every message, oldest first, with both parties embedded.
    pub async fn list_all(&self) -> Result<Vec<MessageWithUsersDto>, AppError> {
        let messages = MessageRepository::new(self.db).get_all().await?;
        self.with_users(messages).await
    }

    /// Resolves sender and receiver for a batch of messages in one query.
    async fn with_users(
        &self,
        messages: Vec<entity::message::Model>,
    ) -> Result<Vec<MessageWithUsersDto>, AppError> {
        let mut user_ids: Vec<i32> = messages
            .iter()
            .flat_map(|message| [message.sender_id, message.receiver_id])
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<i32, entity::user::Model> =
            UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        Ok(messages
            .into_iter()
            .map(|message| MessageWithUsersDto {
                sender: users.get(&message.sender_id).cloned().map(Into::into),
                receiver: users.get(&message.receiver_id).cloned().map(Into::into),
                message: message.into(),
            })
            .collect())
    }
}
