#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with all migrations applied.
/// Each test gets its own, so no cleanup is needed.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;
    Ok(db)
}
