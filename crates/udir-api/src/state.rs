use axum::extract::FromRef;
use udir_store::UserStore;

use crate::{
    ApiConfig,
    graphql::{UserSchema, build_schema},
};

#[derive(Clone)]
pub struct ApiState {
    pub schema: UserSchema,
    pub store: UserStore,
    pub auth: AuthConfig,
    pub graphiql: bool,
}

/// Settings for the static token guard
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl ApiState {
    pub fn new(config: &ApiConfig, store: UserStore) -> Self {
        if config.auth_token.is_some() {
            tracing::info!("Token guard enabled on /graphql");
        }

        Self {
            schema: build_schema(store.clone()),
            store,
            auth: AuthConfig {
                token: config.auth_token.clone(),
            },
            graphiql: config.graphiql,
        }
    }
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<ApiState> for UserSchema {
    fn from_ref(state: &ApiState) -> Self {
        state.schema.clone()
    }
}
