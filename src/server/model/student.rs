//! Student domain models, input validation and filter criteria.
//!
//! `StudentFields` is the only way to obtain a value the repository will persist: it is
//! produced by `StudentFields::validate`, which trims text, applies the default
//! organization and enforces the age and GPA ranges. Create, update and bulk insert all
//! go through it.

use std::ops::RangeInclusive;

use crate::{
    model::student::{CreateStudentDto, StudentDto, StudentFilterQuery, UpdateStudentDto},
    server::error::validation::ValidationError,
};

/// Organization stored when the submitted one is empty after trimming.
pub const DEFAULT_ORGANIZATION: &str = "No Organization";

/// Accepted ages, bounds inclusive.
pub const AGE_RANGE: RangeInclusive<i32> = 0..=120;

/// Accepted GPAs, bounds inclusive.
pub const GPA_RANGE: RangeInclusive<f64> = 0.0..=4.0;

/// A persisted student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Application-assigned identifier, `max(id) + 1` at insertion time.
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gpa: f64,
    pub organization_name: String,
}

impl Student {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            gpa: entity.gpa,
            organization_name: entity.organization_name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            gpa: self.gpa,
            organization_name: self.organization_name,
        }
    }
}

/// Validated and normalized student fields, everything except the id.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub gpa: f64,
    pub organization_name: String,
}

impl StudentFields {
    /// Validates raw input and normalizes it for storage.
    ///
    /// Name and organization are trimmed; an empty organization becomes
    /// [`DEFAULT_ORGANIZATION`]. Text fields have no length limit.
    ///
    /// # Arguments
    /// - `name` - Submitted name
    /// - `age` - Submitted age
    /// - `gpa` - Submitted GPA
    /// - `organization_name` - Submitted organization, possibly empty
    ///
    /// # Returns
    /// - `Ok(StudentFields)` - Normalized fields ready to persist
    /// - `Err(ValidationError::AgeOutOfRange)` - Age below 0 or above 120
    /// - `Err(ValidationError::GpaOutOfRange)` - GPA below 0.0, above 4.0 or not finite
    pub fn validate(
        name: &str,
        age: i32,
        gpa: f64,
        organization_name: &str,
    ) -> Result<Self, ValidationError> {
        if !AGE_RANGE.contains(&age) {
            return Err(ValidationError::AgeOutOfRange(age));
        }
        // NaN is never contained in the range
        if !GPA_RANGE.contains(&gpa) {
            return Err(ValidationError::GpaOutOfRange(gpa));
        }

        let organization_name = match organization_name.trim() {
            "" => DEFAULT_ORGANIZATION.to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            name: name.trim().to_string(),
            age,
            gpa,
            organization_name,
        })
    }

    /// Validates a create request body.
    pub fn from_create_dto(dto: &CreateStudentDto) -> Result<Self, ValidationError> {
        Self::validate(&dto.name, dto.age, dto.gpa, &dto.organization_name)
    }

    /// Validates an update request body.
    pub fn from_update_dto(dto: &UpdateStudentDto) -> Result<Self, ValidationError> {
        Self::validate(&dto.name, dto.age, dto.gpa, &dto.organization_name)
    }

    /// Validates every row of a bulk request.
    ///
    /// Fails on the first invalid row so that nothing is written for a batch containing
    /// bad input.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentFields>)` - Normalized rows in input order
    /// - `Err(ValidationError::BulkRow)` - Index and cause of the first invalid row
    pub fn from_bulk_dto(dtos: &[CreateStudentDto]) -> Result<Vec<Self>, ValidationError> {
        dtos.iter()
            .enumerate()
            .map(|(row, dto)| {
                Self::from_create_dto(dto).map_err(|source| ValidationError::BulkRow {
                    row,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

/// Parameters for a full-field update of an existing student.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudentParam {
    /// Id of the student to update, never changed.
    pub id: i64,
    /// Replacement values for every other column.
    pub fields: StudentFields,
}

/// Optional criteria of a filtered listing, combined with AND.
///
/// A `None` criterion is left out of the query entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentFilter {
    /// Inclusive `(min, max)` age bounds.
    pub age_range: Option<(i32, i32)>,
    /// Inclusive `(min, max)` GPA bounds.
    pub gpa_range: Option<(f64, f64)>,
    /// Exact organization names to match.
    pub organizations: Option<Vec<String>>,
}

impl StudentFilter {
    /// Builds filter criteria from the raw query string.
    ///
    /// A range is applied only when both of its bounds are present and non-empty. Bounds
    /// that do not parse as numbers become zero instead of failing the request. The
    /// organization list is split on commas without trimming the entries.
    pub fn from_query(query: &StudentFilterQuery) -> Self {
        let age_range = bounds(&query.age_min, &query.age_max)
            .map(|(min, max)| (min.parse().unwrap_or(0), max.parse().unwrap_or(0)));

        let gpa_range = bounds(&query.gpa_min, &query.gpa_max)
            .map(|(min, max)| (min.parse().unwrap_or(0.0), max.parse().unwrap_or(0.0)));

        let organizations = query
            .organizations
            .as_deref()
            .filter(|orgs| !orgs.is_empty())
            .map(|orgs| orgs.split(',').map(str::to_string).collect());

        Self {
            age_range,
            gpa_range,
            organizations,
        }
    }
}

fn bounds<'a>(min: &'a Option<String>, max: &'a Option<String>) -> Option<(&'a str, &'a str)> {
    match (min.as_deref(), max.as_deref()) {
        (Some(min), Some(max)) if !min.is_empty() && !max.is_empty() => Some((min, max)),
        _ => None,
    }
}
