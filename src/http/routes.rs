use crate::http;
use actix_web::web;

/// Mount `/ping` at the root and the reward API under `/v1`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::health::init_routes).service(
        web::scope("/v1")
            .app_data(http::reward::json_config())
            .configure(http::reward::init_routes),
    );
}
