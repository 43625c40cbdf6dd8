//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so the service layer never touches
//! SeaORM or serde types directly.

pub mod car;
pub mod user;
