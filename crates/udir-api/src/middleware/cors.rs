use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the front-end dev server origins
///
/// # Arguments
/// * `allowed_origins` - List of allowed origin URLs as strings
///
/// # Returns
/// `None` when no origin parses, otherwise a `CorsLayer` allowing GET, POST
/// and PUT with the `Content-Type` and `Authorization` headers. Preflight
/// `OPTIONS` requests are answered by the layer itself.
pub fn create_cors_layer(allowed_origins: Vec<String>) -> Option<CorsLayer> {
    let origins = allowed_origins
        .into_iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    )
}
