//! Log output for the server.
//!
//! One subscriber for every environment: an `EnvFilter` (from `RUST_LOG`,
//! or per-environment defaults) in front of either a pretty console layer
//! or a flattened JSON layer for production log shipping.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug,async_graphql=info",
        Environment::Production => "info,tower_http=info,async_graphql=warn",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over [`default_directives`], e.g.
/// `RUST_LOG=udir_api=trace,async_graphql=debug`.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let output = if env.is_production() {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry().with(output).with(filter).init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
