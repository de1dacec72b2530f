use crate::{
    StoreError, UserStore,
    models::{User, UserFields},
};

pub async fn find_all(store: &UserStore) -> Vec<User> {
    store.read().await.list().to_vec()
}

pub async fn find_by_id(store: &UserStore, id: i32) -> Option<User> {
    store.read().await.get_by_id(id).cloned()
}

pub async fn create_user(store: &UserStore, fields: UserFields) -> User {
    store.write().await.create(fields)
}

pub async fn update_user(
    store: &UserStore,
    id: i32,
    fields: UserFields,
) -> Result<User, StoreError> {
    store.write().await.update(id, fields)
}
