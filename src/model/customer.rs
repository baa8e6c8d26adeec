use entity::{customer::IdentityType, user::AccountStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

/// Request body for `PUT /api/customer/profile`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 255, message = "Address must be between 1 and 255 characters"))]
    pub address: Option<String>,
    pub identity_type: Option<IdentityType>,
    #[validate(length(min = 1, max = 50, message = "Identity number must be between 1 and 50 characters"))]
    pub identity_number: Option<String>,
}

/// Request body for `POST /api/customer/identity`.
///
/// `image` is the base64-encoded document, with or without a `data:image/...`
/// prefix.
#[derive(Debug, Deserialize, Validate)]
pub struct UploadIdentityDto {
    pub identity_type: IdentityType,
    #[validate(length(min = 1, message = "Identity image is required"))]
    pub image: String,
}

/// Request body for `PUT /api/admin/customers/{user_id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountStatusDto {
    pub account_status: AccountStatus,
}

/// Customer profile as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub identity_type: Option<IdentityType>,
    pub identity_number: Option<String>,
    pub identity_image: Option<String>,
}

impl From<entity::customer::Model> for CustomerDto {
    fn from(customer: entity::customer::Model) -> Self {
        Self {
            id: customer.id,
            user_id: customer.user_id,
            name: customer.name,
            address: customer.address,
            identity_type: customer.identity_type,
            identity_number: customer.identity_number,
            identity_image: customer.identity_image,
        }
    }
}

/// Customer with their account data, used by the admin listing/detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerWithUserDto {
    #[serde(flatten)]
    pub customer: CustomerDto,
    pub user: CustomerUserDto,
}

/// Account fields embedded in admin customer views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUserDto {
    #[serde(flatten)]
    pub user: UserSummaryDto,
    pub account_status: AccountStatus,
}

impl From<entity::user::Model> for CustomerUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            account_status: user.account_status,
            user: user.into(),
        }
    }
}

/// Parameters for updating a customer's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub address: Option<String>,
    pub identity_type: Option<IdentityType>,
    pub identity_number: Option<String>,
}
