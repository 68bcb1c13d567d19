use sea_orm::{entity::prelude::*, ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use crate::mapping::{KeyStrategy, Mapped};
use crate::{curso, matricula};

/// Student. Stored in `tb_alunos`; the name lives in `nome_completo`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tb_alunos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(column_name = "nome_completo", column_type = "String(StringLen::N(100))", nullable)]
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_nascimento: Option<DateTime>,
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

impl Related<curso::Entity> for Entity {
    fn to() -> RelationDef { matricula::Relation::Curso.def() }

    fn via() -> Option<RelationDef> { Some(matricula::Relation::Aluno.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

impl Mapped for Entity {
    const KEY: KeyStrategy = KeyStrategy::Sequence(migration::ALUNO_SEQUENCE);

    fn id_column() -> Column { Column::Id }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlunoInput {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_nascimento: Option<DateTime>,
}

impl IntoActiveModel<ActiveModel> for AlunoInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            nome: Set(self.nome),
            email: Set(self.email),
            data_nascimento: Set(self.data_nascimento),
        }
    }
}
