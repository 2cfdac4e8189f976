//! # salecast-server
//!
//! REST API server for the salecast sales ledger. Clients record sales under
//! `/api`, ask `/api/predict` for a one-step linear-trend forecast of sales
//! and profit, and get a static landing page at `/`.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::{Config, ScopePolicy};
use state::AppState;

/// Assemble the application router.
///
/// The predict route shape follows the scoping policy: the path policy mounts
/// `/api/predict/{email}`, every other policy mounts a bare `/api/predict`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let predict = match state.scope {
        ScopePolicy::Path => {
            Router::new().route("/api/predict/{email}", post(routes::predict_for_owner))
        }
        _ => Router::new().route("/api/predict", post(routes::predict)),
    };

    Router::new()
        .route("/api/sales", get(routes::list_sales))
        .route("/api/my-data", get(routes::my_data))
        .route("/api/customer/history/{email}", get(routes::customer_history))
        .route("/api/admin/all-sales", get(routes::list_sales))
        .route("/api/add-item", post(routes::add_item))
        .route("/api/delete-item/{id}", delete(routes::delete_item))
        .merge(predict)
        .route_service("/", ServeFile::new(format!("{static_dir}/index.html")))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the server with configuration from the environment.
pub async fn run() {
    let config = Config::from_env();
    info!("scope policy: {}", config.scope);

    let state = AppState::new(config.scope);
    let app = router(state, &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    info!(
        "salecast-server v{} listening on {addr}",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Invalid HOST:PORT configuration");
    axum::serve(listener, app).await.expect("server error");
}
