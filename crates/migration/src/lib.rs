//! Migrator registering entity migrations in dependency order.
//! The join table comes last since it references both sides.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_cliente;
mod m20220101_000002_create_produto;
mod m20220101_000003_create_aluno;
mod m20220101_000004_create_curso;
mod m20220101_000005_create_matriculas;

/// Name of the sequence backing `tb_alunos.id`.
pub const ALUNO_SEQUENCE: &str = "aluno_sequence";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_cliente::Migration),
            Box::new(m20220101_000002_create_produto::Migration),
            Box::new(m20220101_000003_create_aluno::Migration),
            Box::new(m20220101_000004_create_curso::Migration),
            Box::new(m20220101_000005_create_matriculas::Migration),
        ]
    }
}
