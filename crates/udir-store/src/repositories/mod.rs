// Repository functions take a `&UserStore` and hold its lock only for the
// duration of a single operation, returning owned records.

pub mod user;
