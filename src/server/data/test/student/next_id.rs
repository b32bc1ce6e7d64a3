use super::*;

/// Tests the next id of an empty table.
///
/// Expected: Ok(1)
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(StudentRepository::new(db).next_id().await?, 1);

    Ok(())
}

/// Tests the next id follows the maximum after deletions.
///
/// Expected: Ok(max + 1) for the remaining rows
#[tokio::test]
async fn follows_current_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1, 2, 7]).await?;

    let repo = StudentRepository::new(db);
    assert_eq!(repo.next_id().await?, 8);

    repo.delete(7).await?;
    assert_eq!(repo.next_id().await?, 3);

    Ok(())
}
