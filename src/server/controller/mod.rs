//! HTTP request handlers.
//!
//! Each handler decodes the request, converts DTOs into validated domain parameters,
//! calls the service layer and converts the result back into a DTO. Errors are returned
//! as `AppError` and mapped to status codes in one place.

pub mod health;
pub mod organization;
pub mod student;

#[cfg(test)]
mod test;
