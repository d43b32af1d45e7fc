use actix_web::{middleware::Logger, web, App, HttpServer};
use battle_reward_server::{
    battle::reward::RewardService,
    cache,
    config::{settings, StoreBackend},
    db::{InMemoryRatingStore, RatingStore, RedisRatingStore},
    http, metrics,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = settings();

    // Rating store
    let store: Arc<dyn RatingStore> = match cfg.store {
        StoreBackend::Redis => {
            let client = cache::connect(&cfg.redis)
                .await
                .expect("Failed to connect to Redis");
            Arc::new(RedisRatingStore::new(
                client,
                cache::connection_config(&cfg.redis),
            ))
        }
        StoreBackend::Memory => {
            log::warn!("RATING_STORE=memory: ratings are not persisted across restarts");
            Arc::new(InMemoryRatingStore::new())
        }
    };

    let reward_service =
        web::Data::new(RewardService::new(store).with_deadline(cfg.request_timeout));

    log::info!("listening on {}", cfg.server_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(reward_service.clone())
            .configure(http::routes::init_routes)
    })
    .shutdown_timeout(cfg.shutdown_timeout)
    .bind(&cfg.server_addr)?
    .run()
    .await
}
