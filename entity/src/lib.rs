//! SeaORM entities for the student service database.

pub mod prelude;

pub mod student;
