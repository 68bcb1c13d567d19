//! Create `produto` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produto::Table)
                    .if_not_exists()
                    .col(big_integer(Produto::Id).primary_key().auto_increment())
                    .col(string_null(Produto::Nome))
                    .col(double_null(Produto::Preco))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Produto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Produto { Table, Id, Nome, Preco }
