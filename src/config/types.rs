//! Plain configuration structs passed to `build_application`.

/// File used by the SQLite backend.
pub const DEFAULT_SQLITE_FILE: &str = "db.sqlite";
/// SQLite path that keeps the database in memory for the lifetime of the pool.
pub const SQLITE_IN_MEMORY: &str = ":memory:";
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub hostname: String,
    /// 0 lets the OS pick a free port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            hostname: DEFAULT_HOSTNAME.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

/// Connection parameters for the PostgreSQL backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        PostgresConfig {
            host: "localhost".into(),
            port: 5432,
            username: "username".into(),
            password: "password".into(),
            database: "db".into(),
            max_connections: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseConfig {
    Sqlite { path: String },
    Postgres(PostgresConfig),
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig::Sqlite {
            path: DEFAULT_SQLITE_FILE.into(),
        }
    }
}

impl DatabaseConfig {
    pub fn sqlite_in_memory() -> Self {
        DatabaseConfig::Sqlite {
            path: SQLITE_IN_MEMORY.into(),
        }
    }
}

/// Everything the server entrypoint and the test harness share.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Log level directive (e.g. `info`, `debug`). `None` means the default.
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
