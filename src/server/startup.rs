use crate::server::{
    config::Config, error::AppError, service::deployment::DeploymentService,
    service::user::RoleService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outbound routing requests.
///
/// Redirects are disabled so a misconfigured routing URL cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}

/// Seeds reference data and logs the deployment identity.
pub async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    RoleService::new(db).seed_default_roles().await?;

    let deployment_id = DeploymentService::new(db).get_or_create().await?;
    tracing::info!("Deployment id: {}", deployment_id);

    Ok(())
}
