use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::student::StudentService, state::AppState},
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

/// List the organizations students belong to.
///
/// # Returns
/// - `200 OK` - Distinct organization names, empty names excluded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/organizations",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved organizations", body = Vec<String>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_organizations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let organizations = StudentService::new(&state.db).get_organizations().await?;

    Ok((StatusCode::OK, Json(organizations)))
}
