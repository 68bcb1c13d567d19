use sea_orm::{entity::prelude::*, ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use crate::mapping::{KeyStrategy, Mapped};
use crate::{aluno, matricula};

/// Course. Owns the enrollment relation through the `matriculas` join table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curso")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Matricula }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Matricula => Entity::has_many(matricula::Entity).into(),
        }
    }
}

impl Related<matricula::Entity> for Entity {
    fn to() -> RelationDef { Relation::Matricula.def() }
}

impl Related<aluno::Entity> for Entity {
    fn to() -> RelationDef { matricula::Relation::Aluno.def() }

    fn via() -> Option<RelationDef> { Some(matricula::Relation::Curso.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

impl Mapped for Entity {
    const KEY: KeyStrategy = KeyStrategy::Identity;

    fn id_column() -> Column { Column::Id }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CursoInput {
    pub id: Option<i64>,
    pub nome: Option<String>,
}

impl IntoActiveModel<ActiveModel> for CursoInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            nome: Set(self.nome),
        }
    }
}
