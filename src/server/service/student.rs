//! Student business logic between controllers and the repository.
//!
//! Input arrives here already validated as `StudentFields`. The service adds the existence
//! check for updates and logs the outcome of each write.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{Student, StudentFields, StudentFilter, UpdateStudentParam},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every student.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    /// Creates a single student and returns it with its assigned id.
    pub async fn create(&self, fields: StudentFields) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(fields).await?;

        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    /// Creates all students of a bulk request in one transaction.
    pub async fn create_many(&self, rows: Vec<StudentFields>) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).create_many(rows).await?;

        if let (Some(first), Some(last)) = (students.first(), students.last()) {
            tracing::info!(
                "Bulk inserted {} students with ids {}..={}",
                students.len(),
                first.id,
                last.id
            );
        }

        Ok(students)
    }

    /// Replaces every field of a student.
    ///
    /// Returns `None` if the student doesn't exist, in which case nothing is written.
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.exists(param.id).await? {
            return Ok(None);
        }

        let student = repo.update(param).await?;

        tracing::info!("Updated student {}", student.id);

        Ok(Some(student))
    }

    /// Deletes a student.
    ///
    /// Deleting an id that doesn't exist is not an error; the number of removed rows is
    /// returned so callers can tell the cases apart.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let affected = StudentRepository::new(self.db).delete(id).await?;

        if affected == 0 {
            tracing::debug!("Delete of student {} affected no rows", id);
        } else {
            tracing::info!("Deleted student {}", id);
        }

        Ok(affected)
    }

    /// Finds students whose name contains `term`.
    pub async fn search(&self, term: &str) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).search_by_name(term).await?)
    }

    /// Lists students matching the filter criteria.
    pub async fn filter(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError> {
        tracing::debug!("Filtering students with {:?}", filter);

        Ok(StudentRepository::new(self.db).filter(filter).await?)
    }

    /// Lists distinct, non-empty organization names.
    pub async fn get_organizations(&self) -> Result<Vec<String>, AppError> {
        Ok(StudentRepository::new(self.db).get_organizations().await?)
    }
}
