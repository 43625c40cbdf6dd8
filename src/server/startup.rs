use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, service::auth::AuthService,
};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug,sqlx=warn";

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG` when set and falls back to `info` for the application with request
/// spans from `tower_http` at debug.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the `user` and `car` tables
/// exist before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account can reach the protected routes.
///
/// When `ADMIN_EMAIL`/`ADMIN_PASSWORD` are configured the account is created, or its
/// password and role are reset to the configured values. Otherwise a warning is logged if
/// the database holds no admin at all.
///
/// # Returns
/// - `Ok(())` - Admin seeded or existing admins left untouched
/// - `Err(AppError::DbErr)` - Database error while checking or writing users
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if let Some(admin) = &config.admin {
        let user = AuthService::new(db)
            .ensure_admin(&admin.email, &admin.password)
            .await?;

        tracing::info!("Admin account {} is ready", user.email);
        return Ok(());
    }

    if !UserRepository::new(db).admin_exists().await? {
        tracing::warn!(
            "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to manage the catalog"
        );
    }

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
