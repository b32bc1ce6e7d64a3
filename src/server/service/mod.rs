//! Business logic layer.
//!
//! Services sit between the controllers and the repositories: controllers hand them
//! validated domain parameters, services orchestrate repository calls and return domain
//! models for the controllers to convert into DTOs.

pub mod student;
