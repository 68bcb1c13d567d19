use sea_orm::{entity::prelude::*, ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use crate::mapping::{KeyStrategy, Mapped};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

impl Mapped for Entity {
    const KEY: KeyStrategy = KeyStrategy::Identity;

    fn id_column() -> Column { Column::Id }
}

/// JSON body accepted by `POST /clientes`. A missing or null `id` means insert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClienteInput {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl IntoActiveModel<ActiveModel> for ClienteInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            nome: Set(self.nome),
            email: Set(self.email),
            telefone: Set(self.telefone),
        }
    }
}
