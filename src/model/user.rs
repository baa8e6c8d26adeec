use entity::user::AccountStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User as exposed by the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub account_status: AccountStatus,
}

impl UserDto {
    /// Builds the DTO from a user entity and its resolved role name.
    pub fn from_parts(user: entity::user::Model, role: String) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
            account_status: user.account_status,
        }
    }
}

/// Condensed user representation embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for UserSummaryDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
    pub account_status: AccountStatus,
}
