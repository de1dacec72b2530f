use async_graphql::{Context, ErrorExtensions, Object, Result};
use udir_store::repositories::user as user_repo;

use super::{
    query::store,
    types::{User, UserInput},
};
use crate::{error::ApiError, metrics::record_graphql_operation};

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    // Both mutations return nullable `User` in the schema
    async fn add_user(&self, ctx: &Context<'_>, user: UserInput) -> Result<Option<User>> {
        let store = store(ctx)?;
        let created = user_repo::create_user(store, user.into()).await;

        tracing::info!(id = created.id, login = %created.login, "User created");
        record_graphql_operation("addUser", true);

        Ok(Some(created.into()))
    }

    async fn edit_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        user: UserInput,
    ) -> Result<Option<User>> {
        let store = store(ctx)?;

        match user_repo::update_user(store, id, user.into()).await {
            Ok(updated) => {
                tracing::info!(id, login = %updated.login, "User updated");
                record_graphql_operation("editUser", true);
                Ok(Some(updated.into()))
            }
            Err(e) => {
                tracing::warn!(id, "editUser: {e}");
                record_graphql_operation("editUser", false);
                Err(ApiError::from(e).extend())
            }
        }
    }
}
