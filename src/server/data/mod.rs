//! Database repository layer.
//!
//! Repositories borrow the shared `DatabaseConnection`, use SeaORM entity models
//! internally and return domain models so the service layer stays free of persistence
//! types.

pub mod car;
pub mod user;
