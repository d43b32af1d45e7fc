//! Runtime configuration for the battle reward server.

use once_cell::sync::Lazy;
use std::{env, str::FromStr, time::Duration};

/// Which rating backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    /// Process-local; ratings vanish on restart.
    Memory,
}

#[derive(Debug)]
pub struct RedisSettings {
    /// Full connection URL; wins over the discrete fields below.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub database: i64,
    pub tls: bool,
    /// PEM root certificate used to verify the server.
    pub tls_ca_file: Option<String>,
    pub tls_insecure: bool,
    pub connect_timeout: Duration,
    pub response_timeout: Duration,
}

#[derive(Debug)]
pub struct Settings {
    pub server_addr: String,
    pub store: StoreBackend,
    pub redis: RedisSettings,
    /// Deadline for one reward workflow run.
    pub request_timeout: Duration,
    /// Grace period for in-flight requests on SIGINT/SIGTERM.
    pub shutdown_timeout: u64,
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

        let store = match env::var("RATING_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            _ => StoreBackend::Redis,
        };

        let redis = RedisSettings {
            url: optional("REDIS_URL"),
            host: env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parsed("REDIS_PORT", 6379),
            password: optional("REDIS_PASSWORD"),
            database: parsed("REDIS_DATABASE", 0),
            tls: parsed("REDIS_TLS", false),
            tls_ca_file: optional("REDIS_TLS_CA_FILE"),
            tls_insecure: parsed("REDIS_TLS_INSECURE", false),
            connect_timeout: Duration::from_millis(parsed("REDIS_CONNECT_TIMEOUT_MS", 5_000)),
            response_timeout: Duration::from_millis(parsed("REDIS_RESPONSE_TIMEOUT_MS", 3_000)),
        };

        Settings {
            server_addr,
            store,
            redis,
            request_timeout: Duration::from_millis(parsed("REQUEST_TIMEOUT_MS", 10_000)),
            shutdown_timeout: parsed("SHUTDOWN_TIMEOUT_SECS", 30),
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
