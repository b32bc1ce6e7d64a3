use super::*;

/// Tests substring matching on the name.
///
/// Expected: Ok with Anna, Joanna and annabelle but not Bob
#[tokio::test]
async fn matches_substring_anywhere_in_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, name) in [(1, "Anna"), (2, "Joanna"), (3, "annabelle"), (4, "Bob")] {
        factory::student::StudentFactory::new(db)
            .id(id)
            .name(name)
            .build()
            .await?;
    }

    let students = StudentRepository::new(db).search_by_name("ann").await?;
    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["Anna", "Joanna", "annabelle"]);

    Ok(())
}

/// Tests an empty term matches every student.
///
/// Expected: Ok with all rows
#[tokio::test]
async fn empty_term_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_students(db, &[1, 2]).await?;

    let students = StudentRepository::new(db).search_by_name("").await?;

    assert_eq!(students.len(), 2);

    Ok(())
}

/// Tests a term with no match.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .id(1)
        .name("Bob")
        .build()
        .await?;

    let students = StudentRepository::new(db).search_by_name("zed").await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests case is ignored for non-ASCII letters too.
///
/// Expected: Ok with both spellings for an upper- and a lowercase term
#[tokio::test]
async fn ignores_case_beyond_ascii() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, name) in [(1, "änna"), (2, "ÄNNA"), (3, "anna")] {
        factory::student::StudentFactory::new(db)
            .id(id)
            .name(name)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    for term in ["änn", "ÄNN"] {
        let students = repo.search_by_name(term).await?;
        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![1, 2], "term {}", term);
    }

    let students = repo.search_by_name("ANN").await?;
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3]);

    Ok(())
}

/// Tests `%` and `_` in the term are matched literally.
///
/// Expected: Ok with only the name containing the literal characters
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, name) in [(1, "Ann_Lee"), (2, "AnnaLee")] {
        factory::student::StudentFactory::new(db)
            .id(id)
            .name(name)
            .build()
            .await?;
    }

    let students = StudentRepository::new(db).search_by_name("n_l").await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, 1);

    Ok(())
}
