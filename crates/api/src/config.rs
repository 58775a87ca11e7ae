use crate::auth::session::SessionConfig;

/// Which [`fertiflow_db::storage::Storage`] implementation to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL at the given connection URL.
    Postgres { database_url: String },
    /// In-process tables. Data is lost on restart.
    Memory,
}

impl StorageBackend {
    /// Resolve a `STORAGE_BACKEND` value. `postgres` requires a database URL.
    pub fn parse(name: &str, database_url: Option<String>) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => database_url
                .filter(|url| !url.is_empty())
                .map(|database_url| StorageBackend::Postgres { database_url })
                .ok_or_else(|| "DATABASE_URL must be set when STORAGE_BACKEND=postgres".into()),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "Unknown STORAGE_BACKEND '{other}'. Must be one of: postgres, memory"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
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
    pub storage: StorageBackend,
    /// Session lifetime and cookie flags.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `STORAGE_BACKEND`       | `postgres`                 |
    /// | `DATABASE_URL`          | required for `postgres`    |
    ///
    /// Session variables are documented on [`SessionConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = StorageBackend::parse(
            &std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".into()),
            std::env::var("DATABASE_URL").ok(),
        )
        .unwrap_or_else(|e| panic!("{e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            session: SessionConfig::from_env(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
