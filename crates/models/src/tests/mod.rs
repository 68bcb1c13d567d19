

use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}
