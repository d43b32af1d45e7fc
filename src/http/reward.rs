//! Battle reward endpoint.

use actix_web::{error, post, web, HttpRequest, HttpResponse};

use crate::{battle::reward::RewardService, error::RewardError, protocol::RewardRequest};

/// POST /v1/battle/{battle_id}/reward
#[post("/battle/{battle_id}/reward")]
pub async fn create_reward(
    path: web::Path<String>,
    body: web::Json<RewardRequest>,
    service: web::Data<RewardService>,
) -> Result<HttpResponse, RewardError> {
    let battle_id = path.into_inner();

    match service.create_reward(&battle_id, &body).await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => {
            if matches!(e, RewardError::Store(_) | RewardError::Timeout) {
                log::error!("battle {battle_id}: reward failed: {e}");
            }
            Err(e)
        }
    }
}

/// Body that is not the expected JSON never reaches validation.
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("{} {}: unreadable body: {err}", req.method(), req.path());
    RewardError::MalformedBody(err.to_string()).into()
}

/// JSON extractor config for the reward routes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_reward);
}
