use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ids are assigned by the application, so the key is a plain BIGINT
        // rather than an auto-incrementing column.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(big_integer(Students::Id).primary_key())
                    .col(text(Students::Name))
                    .col(integer(Students::Age))
                    .col(double(Students::Gpa))
                    .col(text(Students::OrganizationName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_org")
                    .table(Students::Table)
                    .col(Students::OrganizationName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_age_gpa")
                    .table(Students::Table)
                    .col(Students::Age)
                    .col(Students::Gpa)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_name")
                    .table(Students::Table)
                    .col(Students::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    Id,
    Name,
    Age,
    Gpa,
    OrganizationName,
}
