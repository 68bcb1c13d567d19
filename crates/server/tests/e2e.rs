use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::{routes, startup::build_cors, state::AppState};

struct TestApp {
    base_url: String,
}

/// Serve the real router over a fresh in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;

    let app: Router = routes::build_router(AppState::from_db(db), build_cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_cliente_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create -> 200, not 201
    let res = c.post(format!("{}/clientes", app.base_url))
        .json(&json!({"nome": "Maria", "email": "maria@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(created["nome"], "Maria");
    assert_eq!(created["telefone"], Value::Null);

    // Fetch by id returns the same object
    let res = c.get(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    // Listed
    let res = c.get(format!("{}/clientes", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    assert!(list.contains(&created));

    // Delete twice -> 204 both times
    for _ in 0..2 {
        let res = c.delete(format!("{}/clientes/{}", app.base_url, id)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
        assert!(res.bytes().await?.is_empty());
    }

    // Gone -> 404 with empty body
    let res = c.get(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.bytes().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_cliente_post_with_id_replaces() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = c.post(format!("{}/clientes", app.base_url))
        .json(&json!({"nome": "Joao", "telefone": "555-0001"}))
        .send().await?
        .json::<Value>().await?;
    let id = created["id"].as_i64().expect("generated id");

    let res = c.post(format!("{}/clientes", app.base_url))
        .json(&json!({"id": id, "nome": "Joao Souza"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let replaced = res.json::<Value>().await?;
    assert_eq!(replaced["id"], id);
    assert_eq!(replaced["nome"], "Joao Souza");
    assert_eq!(replaced["telefone"], Value::Null);

    let list = c.get(format!("{}/clientes", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_cliente_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/clientes/424242", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.bytes().await?.is_empty());

    let res = client().delete(format!("{}/clientes/424242", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_produto_create_and_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/produtos", app.base_url))
        .json(&json!({"nome": "X"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert!(created["id"].is_i64());
    assert_eq!(created["nome"], "X");

    let res = c.get(format!("{}/produtos", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    assert!(list.contains(&created));
    Ok(())
}
