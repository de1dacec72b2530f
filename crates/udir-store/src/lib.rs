pub mod directory;
pub mod error;
pub mod models;
pub mod repositories;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use directory::Directory;
pub use error::StoreError;
pub use models::{User, UserFields};

/// Shared handle to a [`Directory`].
///
/// Clones point at the same directory. Writers hold the lock for the whole
/// read-modify-write so id assignment stays sequential across tasks.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Directory>>,
}

impl UserStore {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.inner.write().await
    }
}

/// Create a store holding the seed users.
pub fn create_store() -> UserStore {
    let store = UserStore::new(Directory::seeded());
    tracing::debug!("User directory seeded");
    store
}
