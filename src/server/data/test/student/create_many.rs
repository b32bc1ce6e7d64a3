use super::*;

/// Tests bulk ids continue from the existing maximum in input order.
///
/// Expected: Ok with ids 6, 7, 8
#[tokio::test]
async fn assigns_sequential_ids_after_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1, 5]).await?;

    let repo = StudentRepository::new(db);
    let created = repo
        .create_many(vec![
            fields("First", 20, 3.0, "A"),
            fields("Second", 21, 3.1, "B"),
            fields("Third", 22, 3.2, ""),
        ])
        .await?;

    let ids: Vec<i64> = created.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![6, 7, 8]);
    assert_eq!(created[0].name, "First");
    assert_eq!(created[2].name, "Third");
    assert_eq!(created[2].organization_name, "No Organization");

    let third = entity::prelude::Student::find_by_id(8).one(db).await?;
    assert_eq!(third.unwrap().name, "Third");
    assert_eq!(repo.get_all().await?.len(), 5);

    Ok(())
}

/// Tests an empty batch is a no-op.
///
/// Expected: Ok with no students created
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let created = repo.create_many(Vec::new()).await?;

    assert!(created.is_empty());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a failure on row 2 of 3 rolls back the whole batch.
///
/// A trigger makes the database reject the second row after the first has
/// already been inserted within the transaction.
///
/// Expected: Err and table unchanged
#[tokio::test]
async fn rolls_back_entire_batch_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1]).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_boom BEFORE INSERT ON students \
         WHEN NEW.name = 'Boom' BEGIN SELECT RAISE(ABORT, 'rejected row'); END;",
    )
    .await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create_many(vec![
            fields("First", 20, 3.0, ""),
            fields("Boom", 21, 3.1, ""),
            fields("Third", 22, 3.2, ""),
        ])
        .await;

    assert!(result.is_err());

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 1);

    Ok(())
}
