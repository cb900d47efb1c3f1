pub mod health;
pub mod validate;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::config::Config;

pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/schemas", get(validate::handle_list_schemas))
        .route("/api/v1/validate/:schema", post(validate::handle_validate_json))
        .route(
            "/api/v1/validate/:schema/form",
            post(validate::handle_validate_form),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
}
