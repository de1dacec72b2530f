//! The in-memory user directory.
//!
//! Records keep their insertion order. Ids are assigned as one plus the
//! current number of records, not from the maximum existing id. Nothing
//! removes records today, so the two policies agree; a delete operation
//! would make new ids collide with existing ones.

use crate::{
    error::StoreError,
    models::{User, UserFields, seed_users},
};

/// Ordered collection of users
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// An empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory holding the four seed records (ids 1 to 4)
    pub fn seeded() -> Self {
        Self {
            users: seed_users(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Look a user up by id. A missing id is not an error.
    pub fn get_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Append a new user and return it
    pub fn create(&mut self, fields: UserFields) -> User {
        let id = next_id(self.users.len());
        let user = User::from_fields(id, fields);
        self.users.push(user.clone());
        user
    }

    /// Replace every writable field of an existing user.
    ///
    /// Optional fields absent from `fields` are cleared on the record.
    pub fn update(&mut self, id: i32, fields: UserFields) -> Result<User, StoreError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        user.login = fields.login;
        user.firstname = fields.firstname;
        user.lastname = fields.lastname;
        user.email = fields.email;

        Ok(user.clone())
    }
}

/// Id for the record appended after `len` others, saturating at `i32::MAX`
fn next_id(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}
