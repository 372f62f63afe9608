mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("kebab-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = Store::from_config(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let app = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::KEBABS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::KEBAB_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
