use async_graphql::{InputObject, SimpleObject};
use udir_store::UserFields;

// No doc comments on these types: they would show up as SDL descriptions.
#[derive(SimpleObject, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl From<udir_store::User> for User {
    fn from(user: udir_store::User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct UserInput {
    pub login: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl From<UserInput> for UserFields {
    fn from(input: UserInput) -> Self {
        Self {
            login: input.login,
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
        }
    }
}
