use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sea_orm::DatabaseConnection;

use crate::{
    data::{customer::CustomerRepository, user::UserRepository},
    error::AppError,
    model::{
        customer::{
            CustomerDto, CustomerWithUserDto, UpdateProfileDto, UpdateProfileParams,
            UploadIdentityDto,
        },
        user::UserDto,
    },
    service::image::decode_base64_image,
};
use entity::user::AccountStatus;

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the customer profile belonging to a user.
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The profile
    /// - `Err(AppError::NotFound)`: The user has no customer row
    pub async fn profile(&self, user_id: i32) -> Result<CustomerDto, AppError> {
        let Some(customer) = CustomerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Err(AppError::NotFound(
                "Customer profile not found for this user.".to_string(),
            ));
        };

        Ok(customer.into())
    }

    /// Updates the customer's own profile fields.
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The updated profile
    /// - `Err(AppError::NotFound)`: The user has no customer row
    pub async fn update_profile(
        &self,
        user_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<CustomerDto, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        let Some(customer) = customer_repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound(
                "Customer profile not found for this user.".to_string(),
            ));
        };

        let customer = customer_repo
            .update_profile(
                customer,
                UpdateProfileParams {
                    address: dto.address,
                    identity_type: dto.identity_type,
                    identity_number: dto.identity_number,
                },
            )
            .await?;

        Ok(customer.into())
    }

    /// Stores an uploaded identity document on the customer's profile.
    ///
    /// The payload is decoded to verify it is a real base64 image, then stored
    /// re-encoded in canonical base64 (no data-URL prefix).
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The updated profile
    /// - `Err(AppError::NotFound)`: The user has no customer row
    /// - `Err(AppError::BadRequest)`: The payload was not decodable
    pub async fn upload_identity(
        &self,
        user_id: i32,
        dto: UploadIdentityDto,
    ) -> Result<CustomerDto, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        let Some(customer) = customer_repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound(
                "Customer profile not found for this user.".to_string(),
            ));
        };

        let bytes = decode_base64_image(&dto.image)?;

        let customer = customer_repo
            .set_identity(customer, dto.identity_type, BASE64.encode(bytes))
            .await?;

        Ok(customer.into())
    }

    /// Lists every customer with their account data.
    pub async fn list(&self) -> Result<Vec<CustomerWithUserDto>, AppError> {
        let customers = CustomerRepository::new(self.db).get_all_with_user().await?;

        Ok(customers
            .into_iter()
            .filter_map(|(customer, user)| {
                user.map(|user| CustomerWithUserDto {
                    customer: customer.into(),
                    user: user.into(),
                })
            })
            .collect())
    }

    /// Gets a customer with their account data.
    ///
    /// # Returns
    /// - `Ok(CustomerWithUserDto)`: The customer
    /// - `Err(AppError::NotFound)`: No customer with that id
    pub async fn get(&self, customer_id: i32) -> Result<CustomerWithUserDto, AppError> {
        let Some((customer, user)) = CustomerRepository::new(self.db)
            .find_by_id_with_user(customer_id)
            .await?
        else {
            return Err(AppError::NotFound("Customer not found.".to_string()));
        };

        let user = user.ok_or_else(|| {
            AppError::InternalError(format!(
                "Customer {} references a missing user",
                customer_id
            ))
        })?;

        Ok(CustomerWithUserDto {
            customer: customer.into(),
            user: user.into(),
        })
    }

    /// Sets the account verification status of a customer's user account.
    ///
    /// The target must exist and hold the customer role; admins are not valid
    /// targets and report as not found, matching the lookup semantics of the
    /// customer views.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The updated account
    /// - `Err(AppError::NotFound)`: No such user, or the user is not a customer
    pub async fn set_account_status(
        &self,
        user_id: i32,
        account_status: AccountStatus,
    ) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, role)) = user_repo.find_with_role(user_id).await? else {
            return Err(AppError::NotFound(
                "User or customer not found.".to_string(),
            ));
        };

        let role = role.ok_or_else(|| {
            AppError::InternalError(format!("User {} references a missing role", user_id))
        })?;

        if role.name != entity::role::CUSTOMER {
            return Err(AppError::NotFound(
                "User or customer not found.".to_string(),
            ));
        }

        let user = user_repo.set_account_status(user, account_status).await?;

        Ok(UserDto::from_parts(user, role.name))
    }
}
