use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user with the id {0} not found!")]
    NotFound(i32),
}
