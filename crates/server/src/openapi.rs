use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClienteDoc {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct ProdutoDoc {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub preco: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clientes::list,
        crate::routes::clientes::get,
        crate::routes::clientes::create,
        crate::routes::clientes::delete,
        crate::routes::produtos::list,
        crate::routes::produtos::create,
    ),
    components(
        schemas(
            HealthResponse,
            ClienteDoc,
            ProdutoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes"),
        (name = "produtos")
    )
)]
pub struct ApiDoc;
