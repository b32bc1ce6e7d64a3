use super::*;

/// Tests creating the first student in an empty table.
///
/// Verifies that the repository assigns id 1 when no rows exist.
///
/// Expected: Ok with id 1
#[tokio::test]
async fn assigns_id_one_in_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(fields("Anna", 21, 3.7, "Chess Club")).await?;

    assert_eq!(student.id, 1);
    assert_eq!(student.name, "Anna");
    assert_eq!(student.organization_name, "Chess Club");

    let db_student = entity::prelude::Student::find_by_id(1).one(db).await?;
    assert!(db_student.is_some());
    assert_eq!(db_student.unwrap().age, 21);

    Ok(())
}

/// Tests that new ids follow the current maximum, not the row count.
///
/// Verifies that gaps in the id sequence are not reused.
///
/// Expected: Ok with id = max + 1
#[tokio::test]
async fn assigns_max_plus_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[2, 9, 4]).await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(fields("Bob", 30, 2.5, "")).await?;

    assert_eq!(student.id, 10);

    Ok(())
}

/// Tests that a failed insert leaves no row behind.
///
/// A trigger rejects the insert inside the transaction.
///
/// Expected: Err and table unchanged
#[tokio::test]
async fn rolls_back_on_insert_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TRIGGER reject_boom BEFORE INSERT ON students \
         WHEN NEW.name = 'Boom' BEGIN SELECT RAISE(ABORT, 'rejected row'); END;",
    )
    .await?;

    let repo = StudentRepository::new(db);
    let result = repo.create(fields("Boom", 30, 2.5, "")).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("rejected row"));
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
