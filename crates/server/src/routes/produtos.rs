use axum::{extract::State, Json};
use sea_orm::IntoActiveModel;
use tracing::info;

use models::produto::{self, ProdutoInput};

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/produtos", tag = "produtos",
    responses((status = 200, description = "All products", body = [crate::openapi::ProdutoDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<produto::Model>>, ApiError> {
    let all = state.produtos.find_all().await?;
    Ok(Json(all))
}

#[utoipa::path(
    post, path = "/produtos", tag = "produtos",
    request_body = crate::openapi::ProdutoDoc,
    responses((status = 200, description = "Saved", body = crate::openapi::ProdutoDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<ProdutoInput>) -> Result<Json<produto::Model>, ApiError> {
    let saved = state.produtos.save(input.into_active_model()).await?;
    info!(id = saved.id, "produto saved");
    Ok(Json(saved))
}
