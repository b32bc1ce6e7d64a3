use super::*;

/// Tests deleting a student by id.
///
/// Expected: Ok(1) and row removed
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1, 2]).await?;

    let repo = StudentRepository::new(db);
    let affected = repo.delete(1).await?;

    assert_eq!(affected, 1);
    assert!(!repo.exists(1).await?);
    assert!(repo.exists(2).await?);

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0), not an error
#[tokio::test]
async fn reports_zero_rows_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1]).await?;

    let repo = StudentRepository::new(db);
    assert_eq!(repo.delete(1).await?, 1);
    assert_eq!(repo.delete(1).await?, 0);

    Ok(())
}
