use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use udir_api::{config::ApiConfig, state::ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    udir_api::tracing::init_tracing(&config.env);

    let metrics_handle = udir_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let store = udir_store::create_store();
    let state = ApiState::new(&config, store);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(udir_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = udir_api::router::app(state, &config)
        .merge(metrics_app)
        .layer(trace_layer)
        .layer(middleware::from_fn(udir_api::metrics::track_metrics));

    tracing::info!("Environment: {:?}", config.env);
    if config.graphiql {
        tracing::info!("GraphiQL explorer at http://localhost:{}/graphql", config.port);
    }
    if !config.parsed_allowed_origins().is_empty() {
        tracing::info!("CORS origins: {}", config.allowed_origins);
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Start server on :{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
