use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQLRequest;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use super::{UserSchema, format::format_response};
use crate::{auth::TokenAuth, state::ApiState};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Create the GraphQL routes
pub fn routes() -> Router<ApiState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
}

/// Execute a query or mutation
async fn graphql_handler(
    _auth: TokenAuth,
    State(schema): State<UserSchema>,
    req: GraphQLRequest,
) -> impl IntoResponse {
    let request = req.into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("anonymous"),
        "Executing GraphQL request"
    );

    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }

    let (status, body) = format_response(response);
    (status, Json(body))
}

/// Serve the GraphiQL explorer
async fn graphiql(_auth: TokenAuth, State(state): State<ApiState>) -> Response {
    if !state.graphiql {
        return (StatusCode::NOT_FOUND, "GraphiQL is disabled").into_response();
    }

    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}
