//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::student::StudentFactory::new(&db)
//!     .id(5)
//!     .name("Anna")
//!     .age(21)
//!     .organization("Chess Club")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, create_students};
