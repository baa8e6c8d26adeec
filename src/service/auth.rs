use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::{customer::CustomerRepository, role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginDto, RegisterDto, UserDto},
};
use entity::user::AccountStatus;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account.
    ///
    /// Creates a user with the `customer` role in unverified status and the
    /// customer profile row that accompanies it.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The created account
    /// - `Err(AppError::BadRequest)`: Email is already registered
    /// - `Err(AppError)`: Database or hashing error
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered.".to_string(),
            ));
        }

        let role = RoleRepository::new(self.db)
            .find_by_name(entity::role::CUSTOMER)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Customer role has not been seeded".to_string())
            })?;

        let user = user_repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password)?,
                role_id: role.id,
                account_status: AccountStatus::Unverified,
            })
            .await?;

        CustomerRepository::new(self.db)
            .create(user.id, user.name.clone())
            .await?;

        Ok(UserDto::from_parts(user, role.name))
    }

    /// Verifies a login attempt.
    ///
    /// # Returns
    /// - `Ok((user, role_name))`: Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))`: Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<(entity::user::Model, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some((user, role)) = user_repo.find_with_role(user.id).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let role = role.ok_or_else(|| {
            AppError::InternalError(format!("User {} references a missing role", user.id))
        })?;

        Ok((user, role.name))
    }
}

/// Hashes a password into a PHC string using Argon2id with default parameters.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
///
/// # Returns
/// - `Ok(true)`: Password matches
/// - `Ok(false)`: Password does not match
/// - `Err(AppError::InternalError)`: The stored hash is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
