use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use udir_store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("user with the id {0} not found!")]
    NotFound(i32),
    #[error("{0}")]
    Auth(String),
    #[error("Missing context data: {0}")]
    MissingContext(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Auth(_) => "UNAUTHENTICATED",
            Self::MissingContext(_) => "INTERNAL",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<async_graphql::Error> for ApiError {
    fn from(err: async_graphql::Error) -> Self {
        Self::MissingContext(err.message)
    }
}

/// Resolver side: the engine reports these in `errors`, next to the data.
impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Transport side: rejections produced before the engine runs.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Token mismatches answer 500, matching the existing clients
            Self::Auth(_) | Self::MissingContext(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
