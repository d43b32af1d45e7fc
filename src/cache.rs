//! Redis client construction for the rating store.
//!
//! Builds the client from [`RedisSettings`] (plain or TLS, optionally pinned
//! to a CA file) and makes sure the server answers before the HTTP listener
//! comes up.

use anyhow::{Context, Result};
use redis::{AsyncCommands, AsyncConnectionConfig, Client as RedisClient, TlsCertificates};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use crate::config::RedisSettings;

/// `REDIS_URL` if given, otherwise assembled from host/port/password/db.
pub fn connection_url(cfg: &RedisSettings) -> String {
    if let Some(url) = &cfg.url {
        return url.clone();
    }
    let scheme = if cfg.tls { "rediss" } else { "redis" };
    let auth = cfg
        .password
        .as_deref()
        .map(|p| format!(":{p}@"))
        .unwrap_or_default();
    let mut url = format!("{scheme}://{auth}{}:{}/{}", cfg.host, cfg.port, cfg.database);
    if cfg.tls && cfg.tls_insecure {
        url.push_str("#insecure");
    }
    url
}

/// Connect/response timeouts applied to every multiplexed connection.
pub fn connection_config(cfg: &RedisSettings) -> AsyncConnectionConfig {
    AsyncConnectionConfig::new()
        .set_connection_timeout(cfg.connect_timeout)
        .set_response_timeout(cfg.response_timeout)
}

pub fn client(cfg: &RedisSettings) -> Result<RedisClient> {
    let url = connection_url(cfg);
    let client = match &cfg.tls_ca_file {
        Some(path) if !cfg.tls_insecure => {
            let root_cert =
                std::fs::read(path).with_context(|| format!("reading REDIS_TLS_CA_FILE {path}"))?;
            RedisClient::build_with_tls(
                url.as_str(),
                TlsCertificates {
                    client_tls: None,
                    root_cert: Some(root_cert),
                },
            )?
        }
        _ => RedisClient::open(url.as_str())?,
    };
    Ok(client)
}

/// Build the client and wait (with backoff) until Redis answers PING.
pub async fn connect(cfg: &RedisSettings) -> Result<RedisClient> {
    let client = client(cfg)?;
    let conn_config = connection_config(cfg);

    log::info!("pinging redis at {}", client.get_connection_info().addr);
    let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);
    let (client_ref, config_ref) = (&client, &conn_config);
    Retry::spawn(strategy, || async move {
        let mut conn = client_ref
            .get_multiplexed_async_connection_with_config(config_ref)
            .await?;
        conn.ping::<String>().await
    })
    .await
    .context("redis did not answer PING")?;
    log::info!("connected to redis");

    Ok(client)
}
