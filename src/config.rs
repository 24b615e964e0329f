//! Process configuration from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database: PgConnectOptions,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `DATABASE_URL` wins; otherwise the
    /// connection is assembled field by field from the `POSTGRES_*` variables,
    /// so credentials never pass through URL parsing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let database = match lookup("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Parse {
                key: "DATABASE_URL",
                details: e.to_string(),
            })?,
            None => {
                let options = PgConnectOptions::new_without_pgpass()
                    .host(&get("POSTGRES_HOST", "localhost"))
                    .port(parse(&lookup, "POSTGRES_PORT", 5432)?)
                    .username(&get("POSTGRES_USER", "postgres"))
                    .database(&get("POSTGRES_DB", "todos"));
                match lookup("POSTGRES_PASSWORD").filter(|p| !p.is_empty()) {
                    Some(password) => options.password(&password),
                    None => options,
                }
            }
        };
        Ok(Self {
            database,
            host: get("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 8080)?,
            max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            body_limit: parse(&lookup, "BODY_LIMIT_BYTES", 64 * 1024)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
            key,
            details: e.to_string(),
        }),
        None => Ok(default),
    }
}
