//! HTTP request handlers.
//!
//! Protected handlers take the `AdminUser` extractor first, convert DTOs to service
//! parameters and domain models back to DTOs. They hold no business rules.

pub mod car;
pub mod extract;
pub mod health;

#[cfg(test)]
mod test;
