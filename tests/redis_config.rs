//! Redis connection URL assembly.

use std::time::Duration;

use battle_reward_server::{cache::connection_url, config::RedisSettings};

fn local() -> RedisSettings {
    RedisSettings {
        url: None,
        host: "cache.internal".into(),
        port: 6380,
        password: None,
        database: 2,
        tls: false,
        tls_ca_file: None,
        tls_insecure: false,
        connect_timeout: Duration::from_secs(1),
        response_timeout: Duration::from_secs(1),
    }
}

#[test]
fn plain_url_from_parts() {
    assert_eq!(connection_url(&local()), "redis://cache.internal:6380/2");
}

#[test]
fn password_and_tls() {
    let cfg = RedisSettings {
        password: Some("s3cret".into()),
        tls: true,
        ..local()
    };
    assert_eq!(connection_url(&cfg), "rediss://:s3cret@cache.internal:6380/2");
}

#[test]
fn insecure_tls_is_flagged_in_url() {
    let cfg = RedisSettings {
        tls: true,
        tls_insecure: true,
        ..local()
    };
    assert_eq!(connection_url(&cfg), "rediss://cache.internal:6380/2#insecure");
}

#[test]
fn explicit_url_wins() {
    let cfg = RedisSettings {
        url: Some("redis://elsewhere:7000/5".into()),
        ..local()
    };
    assert_eq!(connection_url(&cfg), "redis://elsewhere:7000/5");
}
