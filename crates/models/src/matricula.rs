use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{aluno, curso};

/// One (curso, aluno) enrollment pair. The composite key rules out duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matriculas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub curso_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub aluno_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Curso, Aluno }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Curso => Entity::belongs_to(curso::Entity)
                .from(Column::CursoId)
                .to(curso::Column::Id)
                .into(),
            Relation::Aluno => Entity::belongs_to(aluno::Entity)
                .from(Column::AlunoId)
                .to(aluno::Column::Id)
                .into(),
        }
    }
}

impl Related<curso::Entity> for Entity {
    fn to() -> RelationDef { Relation::Curso.def() }
}

impl Related<aluno::Entity> for Entity {
    fn to() -> RelationDef { Relation::Aluno.def() }
}

impl ActiveModelBehavior for ActiveModel {}
