use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};

use crate::{
    ApiConfig, graphql,
    middleware::{cors::create_cors_layer, request_id, security_headers::apply_security_headers},
    state::ApiState,
};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(graphql::routes())
        .fallback(handler_404)
}

/// The full application: routes, state and the middleware stack.
///
/// CORS sits outermost so preflight requests never reach the token guard.
pub fn app(state: ApiState, config: &ApiConfig) -> Router {
    let app = router()
        .with_state(state)
        .layer(middleware::from_fn(request_id::request_id_middleware));

    let app = apply_security_headers(app, config.env.clone());

    match create_cors_layer(config.parsed_allowed_origins()) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
