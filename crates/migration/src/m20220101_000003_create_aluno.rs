//! Create `tb_alunos` table and the `aluno_sequence` id source.
//!
//! PostgreSQL gets a native sequence. Backends without sequences get a
//! single-row `aluno_sequence(next_val)` table holding the next value to hand out.
use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use crate::ALUNO_SEQUENCE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        match manager.get_database_backend() {
            DbBackend::Postgres => {
                db.execute_unprepared(&format!(
                    "CREATE SEQUENCE IF NOT EXISTS {ALUNO_SEQUENCE} START WITH 1 INCREMENT BY 1"
                ))
                .await?;
            }
            _ => {
                manager
                    .create_table(
                        Table::create()
                            .table(Alias::new(ALUNO_SEQUENCE))
                            .if_not_exists()
                            .col(big_integer(Alias::new("next_val")))
                            .to_owned(),
                    )
                    .await?;
                db.execute_unprepared(&format!(
                    "INSERT INTO {ALUNO_SEQUENCE} (next_val) VALUES (1)"
                ))
                .await?;
            }
        }

        manager
            .create_table(
                Table::create()
                    .table(Aluno::Table)
                    .if_not_exists()
                    .col(big_integer(Aluno::Id).primary_key())
                    .col(string_len_null(Aluno::NomeCompleto, 100))
                    .col(string_null(Aluno::Email))
                    .col(date_time_null(Aluno::DataNascimento))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Aluno::Table).to_owned()).await?;
        match manager.get_database_backend() {
            DbBackend::Postgres => {
                manager
                    .get_connection()
                    .execute_unprepared(&format!("DROP SEQUENCE IF EXISTS {ALUNO_SEQUENCE}"))
                    .await?;
            }
            _ => {
                manager
                    .drop_table(Table::drop().table(Alias::new(ALUNO_SEQUENCE)).if_exists().to_owned())
                    .await?;
            }
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aluno {
    #[sea_orm(iden = "tb_alunos")]
    Table,
    Id,
    NomeCompleto,
    Email,
    DataNascimento,
}
