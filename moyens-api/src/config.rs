//! Environment-driven configuration.
//!
//! Values come from the process environment. Outside production
//! (`APP_ENV` unset or anything but `production`) a local `.env` file is
//! loaded first; a missing file is not an error.

use std::{str::FromStr, time::Duration};

use crate::StartupError;

/// Fixed listen address of the service.
pub const BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the discrete parameters.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: SslMode,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

// Hand-written so the password never reaches the logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Postgres `sslmode` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "allow" => Ok(Self::Allow),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCa),
            "verify-full" => Ok(Self::VerifyFull),
            other => Err(format!("unknown sslmode '{other}'")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub allowed_origins: AllowedOrigins,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parses `ALLOW_ORIGINS`: `*` (or nothing) allows every origin,
    /// otherwise a comma-separated list.
    pub fn parse(raw: Option<&str>) -> Self {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Raw `LOG_LEVEL`; see [`crate::logging::level_directive`].
    pub level: Option<String>,
    pub pretty: bool,
    pub service_name: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Config`] when a variable holds a value that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, StartupError> {
        if !is_production(std::env::var("APP_ENV").ok().as_deref()) {
            match dotenvy::dotenv() {
                Ok(_) => {}
                Err(err) if err.not_found() => {}
                Err(err) => {
                    return Err(StartupError::Config(format!("invalid .env file: {err}")));
                }
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Config`] when a variable holds a value that
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
            user: get("POSTGRES_USER").unwrap_or_default(),
            password: lookup("POSTGRES_PASSWORD").unwrap_or_default(),
            name: get("POSTGRES_DB").unwrap_or_default(),
            ssl_mode: parse_or("DB_SSLMODE", get("DB_SSLMODE"), SslMode::default())?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", get("DB_MIN_CONNECTIONS"), 1)?,
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                get("DB_CONNECT_TIMEOUT_SECS"),
                5,
            )?),
        };

        if database.min_connections > database.max_connections {
            return Err(StartupError::Config(format!(
                "DB_MIN_CONNECTIONS ({}) exceeds DB_MAX_CONNECTIONS ({})",
                database.min_connections, database.max_connections
            )));
        }

        let http = HttpConfig {
            allowed_origins: AllowedOrigins::parse(get("ALLOW_ORIGINS").as_deref()),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                30,
            )?),
        };

        let logging = LoggingConfig {
            level: get("LOG_LEVEL"),
            pretty: get("LOG_PRETTY").is_some_and(|value| value.eq_ignore_ascii_case("true")),
            service_name: get("SERVICE_NAME"),
        };

        Ok(Self {
            database,
            http,
            logging,
        })
    }
}

fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|env| env.trim().eq_ignore_ascii_case("production"))
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, StartupError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err| StartupError::Config(format!("{key}='{value}': {err}"))),
    }
}
