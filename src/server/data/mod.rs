//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Every query, insert, update and delete is
//! performed through these repositories.

pub mod student;
