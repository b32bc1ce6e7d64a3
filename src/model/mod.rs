//! Wire-level DTOs shared by every endpoint.
//!
//! These types define the JSON shapes accepted and returned by the HTTP API. Server-side
//! code converts between them and the domain models in `server::model` at the controller
//! boundary.

pub mod api;
pub mod student;
