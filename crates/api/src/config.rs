use anyhow::Context;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Database connection settings, shared by the server and the seed command.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string (`DATABASE_URL`, required).
    pub url: String,
    /// Pool size (`DB_MAX_CONNECTIONS`, default: `20`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Panics on a missing `DATABASE_URL` or a malformed `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        Self::try_from_env().expect("invalid database configuration")
    }

    /// Fallible variant of [`DatabaseConfig::from_env`], for callers that
    /// report configuration problems instead of aborting.
    pub fn try_from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("DB_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(url: Option<String>, max_connections: Option<String>) -> anyhow::Result<Self> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .context("DATABASE_URL must be set")?;

        let max_connections = match max_connections {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got {raw:?}"))?,
            None => 20,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
