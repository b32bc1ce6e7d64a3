use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{
            BulkInsertResultDto, CreateStudentDto, CreatedStudentDto, StudentDto,
            UpdateStudentDto,
        },
    },
    server::{
        controller::{
            health::{openapi, root},
            organization::{self, get_organizations},
            student::{
                self, bulk_create_students, create_student, delete_student, filter_students,
                get_students, search_students, update_student,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        student::get_students,
        student::create_student,
        student::update_student,
        student::delete_student,
        student::search_students,
        student::filter_students,
        student::bulk_create_students,
        organization::get_organizations,
    ),
    components(schemas(
        StudentDto,
        CreateStudentDto,
        UpdateStudentDto,
        CreatedStudentDto,
        BulkInsertResultDto,
        MessageDto,
        ErrorDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi))
        // Literal segments are registered ahead of `/students/{id}`
        .route("/students/search", get(search_students))
        .route("/students/filter", get(filter_students))
        .route("/students/bulk", post(bulk_create_students))
        .route("/students", get(get_students).post(create_student))
        .route("/students/{id}", put(update_student).delete(delete_student))
        .route("/organizations", get(get_organizations))
}
