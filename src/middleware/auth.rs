use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Role requirement a route can demand from the authenticated user.
pub enum Permission {
    Admin,
    Customer,
}

/// The authenticated user resolved by `AuthGuard`, with their role name.
#[derive(Debug)]
pub struct AuthedUser {
    pub user: entity::user::Model,
    pub role: String,
}

impl AuthedUser {
    pub fn is_admin(&self) -> bool {
        self.role == entity::role::ADMIN
    }

    pub fn is_customer(&self) -> bool {
        self.role == entity::role::CUSTOMER
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated user and checks the required permissions.
    ///
    /// An empty permission list only requires a valid login. The user's role is
    /// loaded once and checked against every requirement.
    ///
    /// # Returns
    /// - `Ok(AuthedUser)` - Authenticated user satisfying all permissions
    /// - `Err(AppError::AuthErr(_))` - Not logged in, unknown user, or role mismatch
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some((user, role)) = user_repo.find_with_role(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        // The role FK guarantees a role row; a missing one is data corruption.
        let role = role.ok_or_else(|| {
            AppError::InternalError(format!("User {} references a missing role", user_id))
        })?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if role.name != entity::role::ADMIN {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Route requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Customer => {
                    if role.name != entity::role::CUSTOMER {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Route requires the customer role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(AuthedUser {
            user,
            role: role.name,
        })
    }
}
