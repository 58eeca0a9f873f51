use utoipa_actix_web::service_config::ServiceConfig;

mod controllers;
mod dto;
mod error;
pub mod middlewares;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.configure(controllers::account::routes);
}
