//! SeaORM entities for the car rental catalog.

pub mod prelude;

pub mod car;
pub mod sea_orm_active_enums;
pub mod user;
