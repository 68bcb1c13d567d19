//! Create `matriculas` join table between `curso` and `tb_alunos`.
//! The composite primary key keeps each (curso, aluno) pair unique.
use sea_orm_migration::{prelude::*, schema::*};

use super::{m20220101_000003_create_aluno::Aluno, m20220101_000004_create_curso::Curso};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matriculas::Table)
                    .if_not_exists()
                    .col(big_integer(Matriculas::CursoId))
                    .col(big_integer(Matriculas::AlunoId))
                    .primary_key(
                        Index::create()
                            .col(Matriculas::CursoId)
                            .col(Matriculas::AlunoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matriculas_curso_id")
                            .from(Matriculas::Table, Matriculas::CursoId)
                            .to(Curso::Table, Curso::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matriculas_aluno_id")
                            .from(Matriculas::Table, Matriculas::AlunoId)
                            .to(Aluno::Table, Aluno::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Courses-of-a-student lookups filter on aluno_id alone
        manager
            .create_index(
                Index::create()
                    .name("idx_matriculas_aluno_id")
                    .table(Matriculas::Table)
                    .col(Matriculas::AlunoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Matriculas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Matriculas { Table, CursoId, AlunoId }
