/// User model - a record of the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Sequential identifier, never changes once assigned
    pub id: i32,
    /// Login name (free-form, not unique)
    pub login: String,
    /// Given name
    pub firstname: Option<String>,
    /// Family name
    pub lastname: Option<String>,
    /// Contact email (not unique)
    pub email: Option<String>,
}

/// The writable fields of a user, used by both create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    pub login: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl UserFields {
    /// Fields with only the required login set
    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }
}

impl User {
    pub(crate) fn from_fields(id: i32, fields: UserFields) -> Self {
        Self {
            id,
            login: fields.login,
            firstname: fields.firstname,
            lastname: fields.lastname,
            email: fields.email,
        }
    }

    fn seed(id: i32, login: &str, firstname: &str, lastname: &str, email: &str) -> Self {
        Self {
            id,
            login: login.to_string(),
            firstname: Some(firstname.to_string()),
            lastname: Some(lastname.to_string()),
            email: Some(email.to_string()),
        }
    }
}

/// The four records every fresh directory starts with
pub fn seed_users() -> Vec<User> {
    vec![
        User::seed(1, "bleponge", "Bob", "Leponge", "bob.leponge@corp.com"),
        User::seed(
            2,
            "ctentatcule",
            "Carlo",
            "Tentacule",
            "carlo.tentacule@corp.com",
        ),
        User::seed(
            3,
            "splankton",
            "Sheldon",
            "Plankton",
            "sheldon.plankton@corp.com",
        ),
        User::seed(4, "secureuil", "Sandy", "Ecureuil", "sandy.ecureuil@corp.com"),
    ]
}
