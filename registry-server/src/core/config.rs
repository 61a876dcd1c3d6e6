use std::path::PathBuf;
use std::str::FromStr;

use crate::core::ServerError;
use crate::services::NumberStrategy;

/// Record store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite file under the work directory
    Sqlite,
    /// In-process tables, lost on restart
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(ServerError::Config(format!(
                "STORE_BACKEND must be 'sqlite' or 'memory', got '{other}'"
            ))),
        }
    }
}

/// Server configuration, built once at startup and passed into [`ServerState`].
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | database and log directory |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | APP_ID | employee-registry | application identifier in collection paths |
/// | STORE_BACKEND | sqlite | sqlite \| memory |
/// | DATABASE_PATH | {WORK_DIR}/database/employees.db | SQLite file |
/// | ALLOWED_ORIGIN | http://localhost:3000 | CORS origin of the frontend |
/// | EMPLOYEE_NUMBER_STRATEGY | timestamp | timestamp \| random |
/// | ANONYMOUS_USER | anonymous | owner for requests without `x-user-id`; empty disables |
/// | REQUEST_TIMEOUT_MS | 30000 | request timeout (milliseconds) |
/// | LOG_LEVEL | info | default log filter (RUST_LOG wins) |
/// | LOG_JSON | false | emit JSON log lines (forced in production) |
/// | LOG_DIR | - | daily rolling log files |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// STORE_BACKEND=memory HTTP_PORT=8080 cargo run -p registry-server
/// ```
///
/// [`ServerState`]: crate::core::ServerState
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory (database, logs)
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Application identifier, first segment of every collection path
    pub app_id: String,
    /// Record store backend
    pub store_backend: StoreBackend,
    /// SQLite database file (sqlite backend only)
    pub database_path: Option<String>,
    /// Frontend origin allowed by CORS
    pub allowed_origin: String,
    /// Employee number generation strategy
    pub number_strategy: NumberStrategy,
    /// Owner used when a request carries no identity (None = reject)
    pub anonymous_user: Option<String>,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Default log level
    pub log_level: String,
    /// JSON log output
    pub log_json: bool,
    /// Log directory (rolling files)
    pub log_dir: Option<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; values that are set but invalid
    /// are reported as [`ServerError::Config`].
    pub fn from_env() -> Result<Self, ServerError> {
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::Sqlite,
        };
        let number_strategy = match std::env::var("EMPLOYEE_NUMBER_STRATEGY") {
            Ok(v) => v.parse().map_err(ServerError::Config)?,
            Err(_) => NumberStrategy::default(),
        };
        let allowed_origin =
            std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());
        if http::HeaderValue::from_str(&allowed_origin).is_err() {
            return Err(ServerError::Config(format!(
                "ALLOWED_ORIGIN is not a valid origin: '{allowed_origin}'"
            )));
        }

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            app_id: std::env::var("APP_ID")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "employee-registry".into()),
            store_backend,
            database_path: std::env::var("DATABASE_PATH")
                .ok()
                .filter(|s| !s.is_empty()),
            allowed_origin,
            number_strategy,
            anonymous_user: match std::env::var("ANONYMOUS_USER") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(v.trim().to_string()),
                Err(_) => Some("anonymous".into()),
            },
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// In-memory configuration for tests and demos
    ///
    /// Does not read the environment.
    pub fn in_memory(app_id: impl Into<String>) -> Self {
        Self {
            work_dir: "./data".into(),
            http_port: 0,
            app_id: app_id.into(),
            store_backend: StoreBackend::Memory,
            database_path: None,
            allowed_origin: "http://localhost:3000".into(),
            number_strategy: NumberStrategy::default(),
            anonymous_user: Some("anonymous".into()),
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }

    /// Database directory under the work dir
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Resolved SQLite database file
    pub fn database_file(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => self.database_dir().join("employees.db"),
        }
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
