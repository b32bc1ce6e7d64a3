use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{
            BulkInsertResultDto, CreateStudentDto, CreatedStudentDto, StudentDto,
            StudentFilterQuery, StudentSearchQuery, UpdateStudentDto,
        },
    },
    server::{
        error::AppError,
        model::student::{StudentFields, StudentFilter, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// # Returns
/// - `200 OK` - Every student ordered by id, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new student.
///
/// Trims name and organization, defaults an empty organization to "No Organization" and
/// assigns the next id (`max(id) + 1`).
///
/// # Returns
/// - `201 Created` - Id of the new student
/// - `400 Bad Request` - Malformed JSON or age/GPA out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = CreatedStudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let fields = StudentFields::from_create_dto(&payload)?;

    let student = StudentService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedStudentDto {
            id: student.id,
            message: "Student created successfully".to_string(),
        }),
    ))
}

/// Replace every field of an existing student.
///
/// # Returns
/// - `200 OK` - Student updated
/// - `400 Bad Request` - Non-numeric id, malformed JSON or age/GPA out of range
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = MessageDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let param = UpdateStudentParam {
        id,
        fields: StudentFields::from_update_dto(&payload)?,
    };

    match StudentService::new(&state.db).update(param).await? {
        Some(_) => Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Student updated successfully".to_string(),
            }),
        )),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Delete a student.
///
/// Deleting an id that doesn't exist still succeeds.
///
/// # Returns
/// - `200 OK` - Student deleted, or there was nothing to delete
/// - `400 Bad Request` - Non-numeric id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Invalid student ID", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    StudentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}

/// Search students by name.
///
/// Matches names containing `q` anywhere, ignoring case. Only the first `q` is used.
///
/// # Returns
/// - `200 OK` - Matching students, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/search",
    tag = STUDENT_TAG,
    params(
        ("q" = Option<String>, Query, description = "Substring to look for in student names")
    ),
    responses(
        (status = 200, description = "Successfully searched students", body = Vec<StudentDto>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = query?;
    let query = StudentSearchQuery::from_pairs(&pairs);

    let students = StudentService::new(&state.db).search(&query.q).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Filter students by age range, GPA range and organizations.
///
/// Each range applies only when both of its bounds are given. Bounds are inclusive and
/// non-numeric bounds count as zero. A repeated parameter uses its first value.
///
/// # Returns
/// - `200 OK` - Matching students, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/filter",
    tag = STUDENT_TAG,
    params(
        ("ageMin" = Option<String>, Query, description = "Minimum age, inclusive"),
        ("ageMax" = Option<String>, Query, description = "Maximum age, inclusive"),
        ("gpaMin" = Option<String>, Query, description = "Minimum GPA, inclusive"),
        ("gpaMax" = Option<String>, Query, description = "Maximum GPA, inclusive"),
        ("organizations" = Option<String>, Query, description = "Comma-separated organization names")
    ),
    responses(
        (status = 200, description = "Successfully filtered students", body = Vec<StudentDto>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn filter_students(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = query?;
    let filter = StudentFilter::from_query(&StudentFilterQuery::from_pairs(&pairs));

    let students = StudentService::new(&state.db).filter(&filter).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create several students in one transaction.
///
/// Every row is validated before anything is written; ids continue from the current
/// maximum in input order. Either all rows are stored or none.
///
/// # Returns
/// - `201 Created` - Number of students created
/// - `400 Bad Request` - Malformed JSON or a row with age/GPA out of range
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/students/bulk",
    tag = STUDENT_TAG,
    request_body = Vec<CreateStudentDto>,
    responses(
        (status = 201, description = "Successfully created students", body = BulkInsertResultDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_students(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateStudentDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let rows = StudentFields::from_bulk_dto(&payload)?;

    let students = StudentService::new(&state.db).create_many(rows).await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkInsertResultDto {
            message: "Bulk insert successful".to_string(),
            count: students.len(),
        }),
    ))
}
