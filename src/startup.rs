use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::{role::RoleRepository, user::UserRepository},
    error::AppError,
    model::user::CreateUserParams,
    service::auth::hash_password,
};
use entity::user::AccountStatus;

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before
/// the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cookie-session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity. The session table is
/// migrated into the same SQLite database the application uses.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be applied to the router
/// - `Err(AppError)` - Session table migration failed
pub async fn session_layer(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the `admin` and `customer` roles.
///
/// Idempotent; roles are looked up by their unique name and only inserted
/// when missing.
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);
    role_repo.ensure(entity::role::ADMIN).await?;
    role_repo.ensure(entity::role::CUSTOMER).await?;

    Ok(())
}

/// Creates the bootstrap admin account when none exists.
///
/// Looks for any admin-role user; when none is found and `ADMIN_EMAIL` /
/// `ADMIN_PASSWORD` are configured, creates a verified admin account with
/// those credentials. Without the configuration it only logs a warning, since
/// the admin routes are unreachable until an admin exists.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
             admin routes will be unreachable"
        );
        return Ok(());
    };

    let admin_role = RoleRepository::new(db).ensure(entity::role::ADMIN).await?;

    let user = user_repo
        .create(CreateUserParams {
            name: "Administrator".to_string(),
            email: email.clone(),
            password_hash: hash_password(password)?,
            role_id: admin_role.id,
            account_status: AccountStatus::Verified,
        })
        .await?;

    tracing::info!("Created bootstrap admin account {}", user.email);

    Ok(())
}
