use sea_orm::entity::prelude::*;

/// A single row of the `students` table.
///
/// The primary key is assigned by the application (`max(id) + 1`) rather than by the
/// database, hence `auto_increment = false`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub age: i32,
    #[sea_orm(column_type = "Double")]
    pub gpa: f64,
    pub organization_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
