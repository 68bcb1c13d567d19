//! Primary-key generation strategy per entity.
//!
//! Table and column names live on each entity's `#[sea_orm(...)]` attributes.
//! What sea-orm cannot describe is *where* a new id comes from, so every
//! persisted entity also implements [`Mapped`].

use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, Statement};

use crate::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// The store assigns the id on insert (auto-increment / identity column).
    Identity,
    /// The id is drawn from the named sequence before insert.
    Sequence(&'static str),
}

pub trait Mapped: EntityTrait {
    const KEY: KeyStrategy;

    fn id_column() -> Self::Column;
}

/// Draw the next value from `sequence`.
///
/// On PostgreSQL this is `nextval`. Elsewhere the sequence is the single-row
/// table created by the migrations; callers should hold a transaction so the
/// read and the bump are not interleaved with another allocation.
pub async fn next_sequence_value<C: ConnectionTrait>(db: &C, sequence: &str) -> Result<i64, ModelError> {
    let backend = db.get_database_backend();
    let select = match backend {
        DbBackend::Postgres => format!("SELECT nextval('{sequence}') AS id"),
        _ => format!("SELECT next_val AS id FROM {sequence}"),
    };
    let row = db
        .query_one(Statement::from_string(backend, select))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Sequence(format!("{sequence} has no current value")))?;
    let id: i64 = row.try_get("", "id").map_err(|e| ModelError::Db(e.to_string()))?;

    if backend != DbBackend::Postgres {
        db.execute(Statement::from_string(
            backend,
            format!("UPDATE {sequence} SET next_val = next_val + 1"),
        ))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    }
    Ok(id)
}
