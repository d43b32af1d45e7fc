//! Liveness probe.

use actix_web::{get, web, HttpResponse, Responder};

#[get("/ping")]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("pong")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ping);
}
