use std::sync::Arc;

use sea_orm::DatabaseConnection;

use models::{cliente, produto};
use service::{
    cliente_service::ClienteService,
    repository::{Repository, SeaOrmRepository},
};

/// Everything the handlers reach for, wired by hand at startup.
#[derive(Clone)]
pub struct AppState {
    pub clientes: Arc<ClienteService>,
    pub produtos: Arc<dyn Repository<produto::Entity>>,
}

impl AppState {
    pub fn new(clientes: Arc<ClienteService>, produtos: Arc<dyn Repository<produto::Entity>>) -> Self {
        Self { clientes, produtos }
    }

    /// Standard wiring: SeaORM repositories over one shared pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let clientes_repo = Arc::new(SeaOrmRepository::<cliente::Entity>::new(db.clone()));
        let produtos_repo = Arc::new(SeaOrmRepository::<produto::Entity>::new(db));
        Self::new(Arc::new(ClienteService::new(clientes_repo)), produtos_repo)
    }
}
