use axum::{extract::{Path, State}, http::StatusCode, Json};
use sea_orm::IntoActiveModel;
use tracing::info;

use models::cliente::{self, ClienteInput};

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/clientes", tag = "clientes",
    responses((status = 200, description = "All clients", body = [crate::openapi::ClienteDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<cliente::Model>>, ApiError> {
    let all = state.clientes.find_all().await?;
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClienteDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<cliente::Model>, ApiError> {
    state.clientes.find_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/clientes", tag = "clientes",
    request_body = crate::openapi::ClienteDoc,
    responses((status = 200, description = "Saved", body = crate::openapi::ClienteDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<ClienteInput>) -> Result<Json<cliente::Model>, ApiError> {
    let saved = state.clientes.save(input.into_active_model()).await?;
    info!(id = saved.id, "cliente saved");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i64, Path, description = "Client id")),
    responses((status = 204, description = "Deleted (or never existed)"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.clientes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
