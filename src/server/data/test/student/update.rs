use super::*;

/// Tests replacing every field of an existing student.
///
/// Expected: Ok with updated values and unchanged id
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::student::StudentFactory::new(db)
        .id(3)
        .name("Old Name")
        .organization("Old Org")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParam {
            id: existing.id,
            fields: fields("New Name", 40, 1.5, "New Org"),
        })
        .await?;

    assert_eq!(updated.id, 3);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.age, 40);
    assert_eq!(updated.gpa, 1.5);
    assert_eq!(updated.organization_name, "New Org");

    let db_student = entity::prelude::Student::find_by_id(3).one(db).await?.unwrap();
    assert_eq!(db_student.name, "New Name");

    Ok(())
}

/// Tests that values with quotes are stored verbatim.
///
/// Every value is bound as a parameter, so SQL metacharacters need no escaping.
///
/// Expected: Ok with the exact strings persisted
#[tokio::test]
async fn stores_quotes_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db).id(1).build().await?;

    let repo = StudentRepository::new(db);
    repo.update(UpdateStudentParam {
        id: 1,
        fields: fields("O'Brien", 22, 3.0, "x'; DROP TABLE students; --"),
    })
    .await?;

    let student = repo.get_by_id(1).await?.unwrap();
    assert_eq!(student.name, "O'Brien");
    assert_eq!(student.organization_name, "x'; DROP TABLE students; --");

    Ok(())
}

/// Tests updating a missing id.
///
/// Expected: Err and no row created
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParam {
            id: 42,
            fields: fields("Ghost", 20, 2.0, ""),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
