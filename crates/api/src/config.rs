use ticketdesk_core::version::ApiVersion;

/// Default store connection string when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/casedb";

/// Errors raised while reading configuration. Any of these is fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY_V1 is not set; the service cannot start without it")]
    MissingV1Key,

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Per-version shared secrets for the `X-API-KEY` header.
#[derive(Clone)]
pub struct ApiKeys {
    /// Required. The service refuses to start without it.
    pub v1: String,
    /// Optional. When absent, `/api/v2/tickets` answers 503.
    pub v2: Option<String>,
}

impl ApiKeys {
    /// The expected credential for `version`, if one is configured.
    pub fn expected_for(&self, version: ApiVersion) -> Option<&str> {
        match version {
            ApiVersion::V1 => Some(self.v1.as_str()),
            ApiVersion::V2 => self.v2.as_deref(),
        }
    }
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("v1", &"<redacted>")
            .field("v2", &self.v2.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// Everything except `API_KEY_V1` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Store connection string (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Maximum pooled store connections (default: `20`).
    pub db_max_connections: u32,
    /// Shared secrets per API version.
    pub api_keys: ApiKeys,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `8000`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/casedb`   |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                 |
    /// | `API_KEY_V1`           | *(required)*                         |
    /// | `API_KEY_V2`           | *(unset: v2 disabled)*               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", var("PORT"), 8000)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30)?;
        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 20)?;

        let api_keys = ApiKeys {
            v1: var("API_KEY_V1").ok_or(ConfigError::MissingV1Key)?,
            v2: var("API_KEY_V2"),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            api_keys,
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: name,
            reason: e.to_string(),
            value,
        }),
    }
}
