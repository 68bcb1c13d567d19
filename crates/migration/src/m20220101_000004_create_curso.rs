//! Create `curso` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Curso::Table)
                    .if_not_exists()
                    .col(big_integer(Curso::Id).primary_key().auto_increment())
                    .col(string_null(Curso::Nome))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Curso::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Curso { Table, Id, Nome }
