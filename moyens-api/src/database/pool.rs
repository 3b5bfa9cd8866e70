//! Connection pool lifecycle: opened once at startup, closed at shutdown.
//!
//! The pool is the only state shared between requests. Each query checks a
//! connection out for its own duration; dropping a request future (client
//! gone, timeout) cancels the query and returns the connection to the pool.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use url::Url;

use crate::{StartupError, config::DatabaseConfig};

/// Builds the connection URL, percent-encoding credentials.
///
/// `DATABASE_URL`, when configured, is returned unchanged.
///
/// # Errors
///
/// Returns an error if the host or credentials cannot be represented in a URL.
pub fn connection_url(config: &DatabaseConfig) -> Result<String, StartupError> {
    if let Some(url) = &config.url {
        return Ok(url.clone());
    }

    let invalid = |what: &str| StartupError::Config(format!("cannot use {what} in a database url"));

    let mut url = Url::parse("postgres://localhost")?;
    url.set_host(Some(&config.host))?;
    url.set_port(Some(config.port))
        .map_err(|()| invalid("DB_PORT"))?;
    if !config.user.is_empty() {
        url.set_username(&config.user)
            .map_err(|()| invalid("POSTGRES_USER"))?;
    }
    if !config.password.is_empty() {
        url.set_password(Some(&config.password))
            .map_err(|()| invalid("POSTGRES_PASSWORD"))?;
    }
    url.set_path(&config.name);
    url.query_pairs_mut()
        .append_pair("sslmode", config.ssl_mode.as_str());

    Ok(url.into())
}

/// Opens the pool and checks that the database answers.
///
/// # Errors
///
/// Any failure here is fatal: the service must not accept traffic without a
/// working pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let url = connection_url(config)?;

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(false);
    if config.url.is_none() {
        options.set_schema_search_path("public");
    }

    let db = Database::connect(options).await.map_err(|err| {
        tracing::error!(error = %err, host = %config.host, "Cannot connect to the database");
        StartupError::Connect(err)
    })?;

    db.ping().await.map_err(|err| {
        tracing::error!(error = %err, host = %config.host, "Database did not answer ping");
        StartupError::Ping(err)
    })?;

    tracing::info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(db)
}

/// Closes every pooled connection. Call once the HTTP server has drained.
pub async fn shutdown(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => tracing::info!("Database pool closed"),
        Err(err) => tracing::warn!(error = %err, "Database pool did not close cleanly"),
    }
}
