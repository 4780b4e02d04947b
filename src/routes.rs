use crate::{
    api::{appreciation, dashboard, employee, penalty},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::anyhow;
use std::sync::Arc;

pub type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(requests_per_min)).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))?;
    Ok(Arc::new(Governor::new(&cfg)))
}

/// Malformed JSON bodies become validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::validation(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::validation(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Limiter) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope(&config.api_prefix)
                .wrap(limiter) // rate limiting
                .configure(api_services),
        );
}

/// All API resources, relative to the API prefix.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/appreciation-letters")
            .service(
                web::resource("")
                    .route(web::post().to(appreciation::create_letter))
                    .route(web::get().to(appreciation::list_letters)),
            )
            .service(web::resource("/{id}").route(web::delete().to(appreciation::delete_letter))),
    )
    .service(
        web::scope("/penalties")
            .service(
                web::resource("")
                    .route(web::post().to(penalty::create_penalty))
                    .route(web::get().to(penalty::list_penalties)),
            )
            .service(web::resource("/{id}").route(web::delete().to(penalty::delete_penalty))),
    )
    .service(
        web::scope("/dashboard")
            .service(web::resource("/stats").route(web::get().to(dashboard::stats)))
            .service(web::resource("/alerts").route(web::get().to(dashboard::alerts)))
            .service(web::resource("/activity").route(web::get().to(dashboard::recent_activity))),
    );
}
