use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub access_token_ttl: usize,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub log_dir: String,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    /// Seconds between automatic derivation runs for today; 0 disables the scheduler
    pub derivation_interval_secs: u64,

    pub api_prefix: String,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: required("SERVER_ADDR")?,
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl: parse_or("ACCESS_TOKEN_TTL", 900)?, // default 15 min
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or("RUN_MIGRATIONS", true)?,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            rate_login_per_min: parse_or("RATE_LOGIN_PER_MIN", 60)?,
            rate_protected_per_min: parse_or("RATE_PROTECTED_PER_MIN", 1000)?,

            derivation_interval_secs: parse_or("DERIVATION_INTERVAL_SECS", 0)?,

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests(jwt_secret: &str) -> Self {
        Self {
            database_url: String::new(),
            jwt_secret: jwt_secret.to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            access_token_ttl: 900,
            db_max_connections: 1,
            run_migrations: false,
            log_dir: "logs".to_string(),
            rate_login_per_min: 60,
            rate_protected_per_min: 1000,
            derivation_interval_secs: 0,
            api_prefix: "/api/v1".to_string(),
        }
    }
}
