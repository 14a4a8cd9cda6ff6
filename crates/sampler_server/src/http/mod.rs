//! Router assembly for the catalog HTTP API.

pub mod cors;
pub mod handlers;
pub mod request_log;
pub mod response;

use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post, put};
use axum::Router;

/// Builds the public router over `state`.
///
/// Unmatched paths and unsupported methods on known paths both fall
/// through to the JSON 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root_handler).fallback(handlers::fallback_handler),
        )
        .route(
            "/api/presets",
            get(handlers::list_presets_handler).fallback(handlers::fallback_handler),
        )
        .route(
            "/api/presets/:name",
            get(handlers::get_preset_handler).fallback(handlers::fallback_handler),
        )
        .route(
            "/api/preset/addPreset",
            post(handlers::add_preset_handler).fallback(handlers::fallback_handler),
        )
        .route(
            "/api/preset/:preset_name/modifyName",
            put(handlers::rename_preset_handler).fallback(handlers::fallback_handler),
        )
        .route(
            "/api/sound/:sound_name/modifyName",
            put(handlers::rename_sound_handler).fallback(handlers::fallback_handler),
        )
        .fallback(handlers::fallback_handler)
        .layer(from_fn(cors::cors_middleware))
        .layer(from_fn(request_log::log_request))
        .with_state(state)
}
