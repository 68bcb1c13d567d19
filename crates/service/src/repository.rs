use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    sea_query::ValueType, ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use tracing::debug;

use models::mapping::{next_sequence_value, KeyStrategy, Mapped};

use crate::errors::ServiceError;

/// Data access for one entity type, keyed by a numeric id.
#[async_trait]
pub trait Repository<E: EntityTrait>: Send + Sync {
    /// All rows, in whatever order the store returns them.
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<E::Model>, ServiceError>;

    /// Insert when the id is unset, replace the row when it exists.
    /// An id that matches no row is discarded and a fresh one generated.
    async fn save(&self, entity: E::ActiveModel) -> Result<E::Model, ServiceError>;

    /// Succeeds whether or not a row was removed.
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository, parameterised by entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

impl<E> Clone for SeaOrmRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

fn requested_id<E: Mapped>(active: &E::ActiveModel) -> Option<i64> {
    active
        .get(E::id_column())
        .into_value()
        .and_then(|v| <i64 as ValueType>::try_from(v).ok())
}

/// Save on an existing connection or transaction. Shared by the repository
/// and by services that need the save inside a larger unit of work.
pub async fn save_entity<E, C>(conn: &C, mut active: E::ActiveModel) -> Result<E::Model, ServiceError>
where
    E: Mapped,
    C: ConnectionTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    let id_column = E::id_column();

    if let Some(id) = requested_id::<E>(&active) {
        let existing = E::find_by_id(id).one(conn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        if existing.is_some() {
            debug!(table = E::default().table_name(), id, "replacing row");
            return active.update(conn).await.map_err(|e| ServiceError::Db(e.to_string()));
        }
        active.not_set(id_column);
    }

    if let KeyStrategy::Sequence(sequence) = E::KEY {
        let next = next_sequence_value(conn, sequence).await?;
        active.set(id_column, next.into());
    }

    let saved = active.insert(conn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(table = E::default().table_name(), "inserted row");
    Ok(saved)
}

#[async_trait]
impl<E> Repository<E> for SeaOrmRepository<E>
where
    E: Mapped,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        E::find().all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E::Model>, ServiceError> {
        E::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: E::ActiveModel) -> Result<E::Model, ServiceError> {
        // Sequence allocation and the insert must not interleave with another save
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let saved = save_entity::<E, _>(&txn, entity).await?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(table = E::default().table_name(), id, rows = res.rows_affected, "delete");
        Ok(())
    }
}
