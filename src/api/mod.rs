pub mod analysis;
pub mod appliances;
pub mod error;
pub mod extract;
pub mod health;
pub mod payload;
pub mod profiles;
pub mod solar;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, state::AppState};

pub fn router(state: AppState) -> Result<Router> {
    let cfg: &Config = &state.cfg;
    let cors = if cfg.server.enable_cors {
        Some(
            CorsLayer::new()
                .allow_origin(cfg.server.cors_origin.parse::<HeaderValue>()?)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
    } else {
        None
    };
    let timeout = Duration::from_secs(cfg.server.request_timeout_secs);

    let api = Router::new()
        .route(
            "/profiles",
            post(profiles::create_profile).get(profiles::list_profiles),
        )
        .route("/profiles/:id", get(profiles::get_profile))
        .route(
            "/profiles/:id/appliances",
            post(appliances::add_appliance).get(appliances::list_appliances),
        )
        .route(
            "/profiles/:id/solar",
            post(solar::set_solar).get(solar::get_solar),
        )
        .route("/profiles/:id/analysis", get(analysis::run_analysis));

    let mut router = Router::new()
        .nest("/api", api)
        .route("/health", get(health::health_check))
        .with_state(state);

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    Ok(router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    timeout,
                )),
        )
        .layer(TraceLayer::new_for_http()))
}
