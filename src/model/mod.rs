//! Wire types shared by the HTTP API.
//!
//! DTOs in this module define the JSON bodies accepted and returned by the controllers.
//! They carry no behavior; conversion to and from domain models lives next to the
//! domain models in `server::model`.

pub mod api;
pub mod car;
