use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gpa: f64,
    pub organization_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub age: i32,
    pub gpa: f64,
    /// Falls back to "No Organization" when omitted or blank.
    #[serde(default)]
    pub organization_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStudentDto {
    pub name: String,
    pub age: i32,
    pub gpa: f64,
    #[serde(default)]
    pub organization_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedStudentDto {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkInsertResultDto {
    pub message: String,
    pub count: usize,
}

/// Raw query string of `GET /students/filter`.
///
/// Values stay as strings so the server can tell an absent or empty bound apart from a
/// malformed one.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct StudentFilterQuery {
    #[serde(rename = "ageMin")]
    pub age_min: Option<String>,
    #[serde(rename = "ageMax")]
    pub age_max: Option<String>,
    #[serde(rename = "gpaMin")]
    pub gpa_min: Option<String>,
    #[serde(rename = "gpaMax")]
    pub gpa_max: Option<String>,
    /// Comma-separated organization names.
    pub organizations: Option<String>,
}

impl StudentFilterQuery {
    /// Builds the query from decoded `key=value` pairs, keeping the first value of a
    /// repeated key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            age_min: first_value(pairs, "ageMin"),
            age_max: first_value(pairs, "ageMax"),
            gpa_min: first_value(pairs, "gpaMin"),
            gpa_max: first_value(pairs, "gpaMax"),
            organizations: first_value(pairs, "organizations"),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct StudentSearchQuery {
    #[serde(default)]
    pub q: String,
}

impl StudentSearchQuery {
    /// Builds the query from decoded `key=value` pairs. A missing `q` searches for the
    /// empty string, a repeated one uses its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q").unwrap_or_default(),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}
