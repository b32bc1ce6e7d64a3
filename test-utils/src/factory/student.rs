//! Student factory for creating test student rows.
//!
//! Rows are inserted directly through the entity, bypassing the repository, so tests
//! can seed any id layout (gaps, a specific max id) before exercising the code under test.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .id(5)
///     .name("Joanna")
///     .gpa(3.5)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    name: String,
    age: i32,
    gpa: f64,
    organization_name: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value, unique across the test run
    /// - name: `"Student {id}"`
    /// - age: `20`
    /// - gpa: `3.0`
    /// - organization_name: `"No Organization"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i64;
        Self {
            db,
            id,
            name: format!("Student {}", id),
            age: 20,
            gpa: 3.0,
            organization_name: "No Organization".to_string(),
        }
    }

    /// Sets the primary key for the student.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the student's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student's age.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the student's GPA.
    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Sets the student's organization name.
    pub fn organization(mut self, organization_name: impl Into<String>) -> Self {
        self.organization_name = organization_name.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            gpa: ActiveValue::Set(self.gpa),
            organization_name: ActiveValue::Set(self.organization_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates students with the given ids and default values for every other field.
///
/// # Arguments
/// - `db` - Database connection
/// - `ids` - Primary keys to insert, in order
///
/// # Returns
/// - `Ok(Vec<entity::student::Model>)` - Created students in the order of `ids`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_students(
    db: &DatabaseConnection,
    ids: &[i64],
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(ids.len());
    for &id in ids {
        students.push(StudentFactory::new(db).id(id).build().await?);
    }
    Ok(students)
}
