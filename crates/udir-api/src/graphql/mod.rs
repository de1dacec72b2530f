//! GraphQL schema over the user directory
//!
//! - [`QueryRoot`] (published as `Query`): `users`, `userById`
//! - [`MutationRoot`] (published as `Mutation`): `addUser`, `editUser`
//!
//! The store is injected as schema data; resolvers never reach for a
//! global.

pub mod format;
mod mutation;
mod query;
pub mod routes;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use routes::routes;

use async_graphql::{EmptySubscription, Schema};
use udir_store::UserStore;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the given store
pub fn build_schema(store: UserStore) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use udir_store::create_store;

    /// Trimmed member lines of `{header} { ... }` in an SDL document
    fn block(sdl: &str, header: &str) -> Vec<String> {
        let start = sdl
            .find(&format!("{header} {{"))
            .unwrap_or_else(|| panic!("`{header}` missing from SDL:\n{sdl}"));
        let body = &sdl[start..];
        let open = body.find('{').expect("opening brace");
        let close = body.find('}').expect("closing brace");

        body[open + 1..close]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_sdl_matches_published_schema() {
        let sdl = build_schema(create_store()).sdl();

        assert_eq!(
            block(&sdl, "type User"),
            vec![
                "id: Int!",
                "login: String!",
                "firstname: String",
                "lastname: String",
                "email: String",
            ]
        );
        assert_eq!(
            block(&sdl, "input UserInput"),
            vec![
                "login: String!",
                "firstname: String",
                "lastname: String",
                "email: String",
            ]
        );
        assert_eq!(
            block(&sdl, "type Query"),
            vec!["users: [User!]!", "userById(id: Int!): User"]
        );
        assert_eq!(
            block(&sdl, "type Mutation"),
            vec![
                "addUser(user: UserInput!): User",
                "editUser(id: Int!, user: UserInput!): User",
            ]
        );

        assert!(!sdl.contains("QueryRoot"));
        assert!(!sdl.contains("MutationRoot"));
    }
}
