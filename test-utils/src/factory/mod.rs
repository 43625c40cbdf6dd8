//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they actually assert on. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let car = factory::create_car(&db).await?;
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `car` - Create car entities
//! - `user` - Create user entities
//! - `helpers` - Unique id generation shared by all factories

pub mod car;
pub mod helpers;
pub mod user;

pub use car::create_car;
pub use user::create_user;
