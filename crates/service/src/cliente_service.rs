use std::sync::Arc;

use tracing::instrument;

use models::cliente;
use crate::{errors::ServiceError, repository::Repository};

/// Entry point for client operations. Every call goes straight to the repository.
pub struct ClienteService {
    repo: Arc<dyn Repository<cliente::Entity>>,
}

impl ClienteService {
    pub fn new(repo: Arc<dyn Repository<cliente::Entity>>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<cliente::Model>, ServiceError> { self.repo.find_all().await }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<cliente::Model>, ServiceError> { self.repo.find_by_id(id).await }

    #[instrument(skip_all)]
    pub async fn save(&self, cliente: cliente::ActiveModel) -> Result<cliente::Model, ServiceError> { self.repo.save(cliente).await }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.repo.delete(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::IntoActiveModel;
    use models::cliente::ClienteInput;
    use crate::{repository::SeaOrmRepository, test_support::get_db};

    async fn service() -> Result<ClienteService, anyhow::Error> {
        let db = get_db().await?;
        Ok(ClienteService::new(Arc::new(SeaOrmRepository::<cliente::Entity>::new(db))))
    }

    fn input(nome: &str) -> ClienteInput {
        ClienteInput {
            id: None,
            nome: Some(nome.to_string()),
            email: Some(format!("{}@example.com", nome.to_lowercase())),
            telefone: None,
        }
    }

    #[tokio::test]
    async fn save_then_find_returns_same_entity() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let saved = svc.save(input("Maria").into_active_model()).await?;
        assert!(saved.id > 0);
        assert_eq!(saved.nome.as_deref(), Some("Maria"));

        let found = svc.find_by_id(saved.id).await?.unwrap();
        assert_eq!(found, saved);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_absent() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(svc.find_by_id(9_999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces_row() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let saved = svc.save(input("Joao").into_active_model()).await?;
        let replacement = ClienteInput { id: Some(saved.id), nome: Some("Joao Silva".into()), email: None, telefone: Some("555-0100".into()) };
        let updated = svc.save(replacement.into_active_model()).await?;

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.nome.as_deref(), Some("Joao Silva"));
        assert_eq!(updated.email, None);
        assert_eq!(updated.telefone.as_deref(), Some("555-0100"));
        assert_eq!(svc.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_fresh_row() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let ghost = ClienteInput { id: Some(777), ..input("Ghost") };
        let saved = svc.save(ghost.into_active_model()).await?;
        assert_ne!(saved.id, 777);
        assert!(svc.find_by_id(saved.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_contains_every_saved_client() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let mut ids = Vec::new();
        for nome in ["A", "B", "C"] {
            ids.push(svc.save(input(nome).into_active_model()).await?.id);
        }
        let all = svc.find_all().await?;
        assert!(all.len() >= ids.len());
        for id in ids {
            assert!(all.iter().any(|c| c.id == id));
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let saved = svc.save(input("Temp").into_active_model()).await?;
        svc.delete(saved.id).await?;
        svc.delete(saved.id).await?;
        assert!(svc.find_by_id(saved.id).await?.is_none());
        Ok(())
    }
}
