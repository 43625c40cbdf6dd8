//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They own the business
//! rules of the catalog (which missing-record cases are 400 and which are 404, how
//! licence plate collisions surface) and credential verification, and they work with
//! domain models rather than DTOs or entity models.

pub mod auth;
pub mod car;
