use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

/// Request body for sending a message (customer send and admin reply).
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageDto {
    pub receiver_id: i32,
    #[validate(length(min = 1, message = "Message body is required"))]
    pub body: String,
}

/// Message as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::message::Model> for MessageDto {
    fn from(message: entity::message::Model) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            body: message.body,
            created_at: message.created_at,
        }
    }
}

/// Message with sender and receiver embedded, used by history views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageWithUsersDto {
    #[serde(flatten)]
    pub message: MessageDto,
    pub sender: Option<UserSummaryDto>,
    pub receiver: Option<UserSummaryDto>,
}
