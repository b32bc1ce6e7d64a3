//! Student data repository for database operations.
//!
//! Provides `StudentRepository` for managing rows of the `students` table. Ids are assigned
//! as `max(id) + 1` inside the same transaction as the insert that uses them, so the read
//! and the write happen on one connection; the primary key rejects a duplicate if two
//! writers still race.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::student::{Student, StudentFields, StudentFilter, UpdateStudentParam};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Checks whether a student with the given id exists.
    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the id the next inserted student would receive.
    ///
    /// `max(id) + 1`, or 1 when the table is empty. Only a snapshot: `create` and
    /// `create_many` recompute it inside their own transaction.
    #[cfg(test)]
    pub async fn next_id(&self) -> Result<i64, DbErr> {
        next_id(self.db).await
    }

    /// Creates a student with the next available id.
    ///
    /// Reads the current max id and inserts the row in one transaction using the
    /// database's default isolation.
    ///
    /// # Arguments
    /// - `fields` - Validated student fields
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student including its assigned id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn create(&self, fields: StudentFields) -> Result<Student, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let id = next_id(&txn).await?;
            active_model(id, fields).insert(&txn).await
        }
        .await;

        match result {
            Ok(entity) => {
                txn.commit().await?;
                Ok(Student::from_entity(entity))
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    /// Creates several students in a single read-committed transaction.
    ///
    /// The starting id is read once, then incremented for each row in input order. Every
    /// row uses the same insert statement so the driver's statement cache prepares it only
    /// once per batch. Any failure rolls back the whole batch.
    ///
    /// # Arguments
    /// - `rows` - Validated student fields in insertion order
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Created students in input order
    /// - `Err(DbErr)` - Database error, nothing from the batch is kept
    pub async fn create_many(&self, rows: Vec<StudentFields>) -> Result<Vec<Student>, DbErr> {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), None)
            .await?;

        let result = insert_rows(&txn, rows).await;

        match result {
            Ok(students) => {
                txn.commit().await?;
                Ok(students)
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    /// Replaces every field of an existing student.
    ///
    /// Runs inside a transaction; all values are bound as parameters. The id itself is
    /// never changed.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotUpdated)` - No student exists with the id
    /// - `Err(DbErr)` - Other database error, the transaction is rolled back
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Student, DbErr> {
        let txn = self.db.begin().await?;

        let result = active_model(param.id, param.fields).update(&txn).await;

        match result {
            Ok(entity) => {
                txn.commit().await?;
                Ok(Student::from_entity(entity))
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    /// Deletes a student by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed, 0 when the id did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds students whose name contains `term`, ignoring case.
    ///
    /// Both sides are lowercased with Unicode rules before comparing, so `änn` matches
    /// "ÄNNA" as well as `ann` matches "Anna". SQLite only folds ASCII in `LIKE`, so the
    /// comparison runs here rather than in SQL. An empty term matches every student.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Student>, DbErr> {
        let needle = term.to_lowercase();

        let students = self.get_all().await?;

        Ok(students
            .into_iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Gets students matching every criterion present in `filter`.
    ///
    /// An empty filter returns all students.
    pub async fn filter(&self, filter: &StudentFilter) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(filter_condition(filter))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets the distinct organization names in use, excluding the empty string.
    pub async fn get_organizations(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::OrganizationName)
            .distinct()
            .filter(entity::student::Column::OrganizationName.ne(""))
            .order_by_asc(entity::student::Column::OrganizationName)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

/// Reads `max(id) + 1` on the given connection or transaction.
async fn next_id<C: ConnectionTrait>(conn: &C) -> Result<i64, DbErr> {
    let max_id: Option<Option<i64>> = entity::prelude::Student::find()
        .select_only()
        .column_as(entity::student::Column::Id.max(), "max_id")
        .into_tuple()
        .one(conn)
        .await?;

    Ok(max_id.flatten().unwrap_or(0) + 1)
}

async fn insert_rows(
    txn: &DatabaseTransaction,
    rows: Vec<StudentFields>,
) -> Result<Vec<Student>, DbErr> {
    let mut id = next_id(txn).await?;
    let mut students = Vec::with_capacity(rows.len());

    for fields in rows {
        entity::prelude::Student::insert(active_model(id, fields.clone()))
            .exec_without_returning(txn)
            .await?;

        students.push(Student {
            id,
            name: fields.name,
            age: fields.age,
            gpa: fields.gpa,
            organization_name: fields.organization_name,
        });
        id += 1;
    }

    Ok(students)
}

fn active_model(id: i64, fields: StudentFields) -> entity::student::ActiveModel {
    entity::student::ActiveModel {
        id: ActiveValue::Set(id),
        name: ActiveValue::Set(fields.name),
        age: ActiveValue::Set(fields.age),
        gpa: ActiveValue::Set(fields.gpa),
        organization_name: ActiveValue::Set(fields.organization_name),
    }
}

/// Builds the conjunction of the criteria present in `filter`.
fn filter_condition(filter: &StudentFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some((min, max)) = filter.age_range {
        condition = condition.add(entity::student::Column::Age.between(min, max));
    }
    if let Some((min, max)) = filter.gpa_range {
        condition = condition.add(entity::student::Column::Gpa.between(min, max));
    }
    if let Some(organizations) = &filter.organizations {
        condition = condition
            .add(entity::student::Column::OrganizationName.is_in(organizations.iter().cloned()));
    }

    condition
}

/// Rolls back a failed transaction, logging if the rollback itself fails.
///
/// Dropping an uncommitted `DatabaseTransaction` also rolls it back; this makes the
/// rollback explicit and observable.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        tracing::warn!("Failed to roll back transaction: {}", err);
    }
}
