use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sheetstack_api::config::ServerConfig;
use sheetstack_api::router::build_app_router;
use sheetstack_api::state::AppState;
use sheetstack_catalog::TemplateStore;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults pointed at `data_dir`.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: data_dir.to_path_buf(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_enabled: false,
        public_base_url: "http://localhost:3000".to_string(),
        metrics_seed: 0,
    }
}

/// Build the full application router over `data_dir` with the production
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(data_dir: &Path) -> Router {
    build_app_with(test_config(data_dir))
}

/// Same as [`build_test_app`] but with the admin gate open.
pub fn build_admin_test_app(data_dir: &Path) -> Router {
    let mut config = test_config(data_dir);
    config.admin_enabled = true;
    build_app_with(config)
}

fn build_app_with(config: ServerConfig) -> Router {
    let state = AppState {
        store: TemplateStore::new(&config.data_dir),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the in-memory app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

/// Write one JSON file into the test data directory.
pub fn write_json(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("fixture write succeeds");
}

/// A small catalog used by most template-facing tests.
pub fn seed_templates(dir: &Path) {
    write_json(
        dir,
        "fluxo-de-caixa.json",
        r#"{
            "slug": "fluxo-de-caixa",
            "title": "Planilha de Fluxo de Caixa",
            "category": "Financeiro",
            "description": "Controle diario de entradas e saidas.",
            "excelUrl": "/downloads/fluxo-de-caixa.xlsx",
            "rating": 4.8,
            "downloadCount": 900,
            "createdAt": "2024-03-10T12:00:00Z"
        }"#,
    );
    write_json(
        dir,
        "controle-estoque.json",
        r#"{
            "slug": "controle-estoque",
            "title": "Controle de Estoque",
            "category": "estoque",
            "keyword": "controle de estoque excel",
            "rating": 4.6,
            "downloadCount": 400,
            "createdAt": "2024-05-01T08:30:00Z"
        }"#,
    );
    write_json(
        dir,
        "orcamento-familiar.json",
        r#"{
            "slug": "orcamento-familiar",
            "title": "Orcamento Familiar",
            "category": "financeiro",
            "rating": 4.9,
            "downloadCount": 100,
            "createdAt": "2024-01-20T00:00:00Z"
        }"#,
    );
}

/// Keyword corpus fixture for the admin endpoints.
pub fn seed_keywords(dir: &Path) {
    write_json(
        dir,
        "keywords.json",
        r#"[
            { "id": "1", "keyword": "planilha fluxo de caixa", "volume": 5400,
              "difficulty": "hard", "cpc": 1.2, "status": "pending" },
            { "id": "2", "keyword": "controle de estoque excel", "volume": 3600,
              "difficulty": "medium", "cpc": 0.9, "status": "excel_generated" },
            { "id": "3", "keyword": "planilha de vendas", "volume": 2900,
              "difficulty": "easy", "cpc": 1.5, "status": "completed" },
            { "id": "4", "keyword": "orcamento familiar", "volume": 8100,
              "difficulty": "medium", "cpc": 0.6, "status": "seo_generated" }
        ]"#,
    );
}
