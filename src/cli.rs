//! Command-line interface definitions.

use crate::config::{
    validate_log_level, AppConfig, DatabaseConfig, PostgresConfig, ServerConfig, DEFAULT_HOSTNAME,
    DEFAULT_PORT, DEFAULT_SQLITE_FILE,
};
use crate::error::ConfigError;
use clap::{Parser, ValueEnum};

/// Parks of Prague - REST API for parks and their coordinates.
#[derive(Parser, Debug)]
#[command(name = "parks-of-prague")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(short = 'H', long, default_value = DEFAULT_HOSTNAME)]
    pub hostname: String,

    /// Port to bind (0 picks a free port)
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level or EnvFilter directives (RUST_LOG takes precedence)
    #[arg(short, long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Database backend; PostgreSQL reads DATABASE_* variables
    #[arg(long, env = "DATABASE_DRIVER", value_enum, default_value_t = Driver::Sqlite)]
    pub database: Driver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Driver {
    Sqlite,
    Postgres,
}

impl Cli {
    /// Resolve flags plus environment into the config passed to `build_application`.
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        self.into_config_with(PostgresConfig::from_env)
    }

    pub fn into_config_with<F>(self, postgres: F) -> Result<AppConfig, ConfigError>
    where
        F: FnOnce() -> Result<PostgresConfig, ConfigError>,
    {
        if let Some(level) = &self.log_level {
            validate_log_level(level)?;
        }
        let database = match self.database {
            Driver::Sqlite => DatabaseConfig::Sqlite {
                path: DEFAULT_SQLITE_FILE.into(),
            },
            Driver::Postgres => DatabaseConfig::Postgres(postgres()?),
        };
        Ok(AppConfig {
            server: ServerConfig {
                hostname: self.hostname,
                port: self.port,
            },
            database,
            log_level: self.log_level.map(|l| l.to_lowercase()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["parks-of-prague"]).unwrap();
        assert_eq!(cli.hostname, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.database, Driver::Sqlite);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["parks-of-prague", "-H", "0.0.0.0", "-p", "9000", "-l", "debug"])
            .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:9000");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(
            config.database,
            DatabaseConfig::Sqlite {
                path: "db.sqlite".into()
            }
        );
    }

    #[test]
    fn postgres_takes_env_parameters() {
        let cli = Cli::try_parse_from(["parks-of-prague", "--database", "postgres"]).unwrap();
        let config = cli
            .into_config_with(|| {
                Ok(PostgresConfig {
                    host: "pg".into(),
                    ..PostgresConfig::default()
                })
            })
            .unwrap();
        match config.database {
            DatabaseConfig::Postgres(pg) => assert_eq!(pg.host, "pg"),
            other => panic!("expected postgres, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let cli = Cli::try_parse_from(["parks-of-prague", "--log-level", "chatty"]).unwrap();
        assert!(matches!(cli.into_config(), Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Cli::try_parse_from(["parks-of-prague", "--port", "http"]).is_err());
    }
}
