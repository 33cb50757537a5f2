//src/main.rs

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

/// Monta o router completo; separado do main para os testes de rota.
fn app(app_state: AppState) -> Router {
    let customer_routes = Router::new()
        .route(
            "/customers",
            post(handlers::customers::upsert_customer).get(handlers::customers::list_customers),
        )
        .route("/customers/register", post(handlers::customers::register_customer))
        .route("/customers/{id}", delete(handlers::customers::delete_customer));

    let catalog_routes = Router::new()
        .route("/items", post(handlers::items::upsert_item))
        .route("/warehouses", post(handlers::warehouses::upsert_warehouse))
        .route("/brands", post(handlers::brands::upsert_brand))
        .route(
            "/promotions",
            post(handlers::promotions::upsert_promotion).get(handlers::promotions::list_promotions),
        )
        .route("/categories", get(handlers::catalog::list_categories))
        .route("/branches", get(handlers::catalog::list_branches))
        .route("/products", get(handlers::catalog::list_products))
        .route("/sync/changes", get(handlers::catalog::sync_changes));

    let order_routes = Router::new().route(
        "/orders",
        post(handlers::orders::upsert_order).get(handlers::orders::list_orders),
    );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/token", post(handlers::token::exchange_token))
        .nest("/api", customer_routes)
        .nest("/api", catalog_routes)
        .nest("/api", order_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger, que movemos para o main.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let addr = app_state.bind_addr.clone();
    let router = app(app_state);

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, router)
        .await
        .expect("Erro no servidor Axum");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::ServiceExt;

    fn test_app(token_url: String) -> Router {
        app(AppState::for_tests(token_url))
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_path(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn upsert_de_cliente_sem_campos_obrigatorios_e_400() {
        let (status, body) = post_json(
            test_app("http://127.0.0.1:1/token".into()),
            "/api/customers",
            json!({ "name": "Loja", "phone": "", "email": "x@y.z" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: phone, country_code");
    }

    #[tokio::test]
    async fn item_sem_sku_code_e_400_nomeando_o_campo() {
        let (status, body) = post_json(
            test_app("http://127.0.0.1:1/token".into()),
            "/api/items",
            json!({ "nameEn": "Sugar" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "skuCode (item_code) is required.");
    }

    #[tokio::test]
    async fn pedido_sem_itens_e_400() {
        let (status, body) = post_json(
            test_app("http://127.0.0.1:1/token".into()),
            "/api/orders",
            json!({ "user_id": "c1", "items": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "items list is required.");
    }

    #[tokio::test]
    async fn json_malformado_e_400_com_detalhe() {
        let response = test_app("http://127.0.0.1:1/token".into())
            .oneshot(
                Request::post("/api/warehouses")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{nao-e-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON input:"));
    }

    #[tokio::test]
    async fn sync_sem_updated_at_e_400() {
        let (status, body) = get_path(
            test_app("http://127.0.0.1:1/token".into()),
            "/api/sync/changes",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameter 'updated_at'");
    }

    #[tokio::test]
    async fn app_key_indecifravel_e_401_sem_tocar_o_upstream() {
        // Um upstream de verdade, só para contar se alguém bate nele.
        let hits = Arc::new(AtomicUsize::new(0));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let token_url = format!("http://{}/token", listener.local_addr().unwrap());
        {
            let hits = hits.clone();
            tokio::spawn(async move {
                loop {
                    if listener.accept().await.is_ok() {
                        hits.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        }

        let (status, body) = post_json(
            test_app(token_url),
            "/api/token",
            json!({
                "app_key": "%%%nao-e-base64%%%",
                "grant_type": "password",
                "username": "u",
                "password": "p"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid app key");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
