use async_graphql::{Context, ErrorExtensions, Object, Result};
use udir_store::{UserStore, repositories::user as user_repo};

use super::types::User;
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    // Every user, in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = store(ctx)?;
        let users = user_repo::find_all(store).await;
        Ok(users.into_iter().map(User::from).collect())
    }

    // Null for an unknown id, unlike editUser
    async fn user_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        let store = store(ctx)?;
        let user = user_repo::find_by_id(store, id).await;
        if user.is_none() {
            tracing::debug!(id, "userById: no such user");
        }
        Ok(user.map(User::from))
    }
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a UserStore> {
    ctx.data::<UserStore>()
        .map_err(|e| ApiError::from(e).extend())
}
