//! Shared helpers for tests that need a live PostgreSQL database.
//!
//! Connection parameters come from `TEST_DB_*` environment variables with
//! local-development defaults. Tests calling these helpers skip (returning
//! early) when the database is unreachable.

use std::env;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::Config;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use crate::store::Store;

pub fn test_config() -> Config {
    Config {
        db_host: env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        db_port: env::var("TEST_DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5432),
        db_user: env::var("TEST_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
        db_password: env::var("TEST_DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
        db_name: env::var("TEST_DB_NAME").unwrap_or_else(|_| "postgres".to_string()),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    }
}

/// Connect to the test database, creating the kebabs table if needed.
///
/// Returns `None` (after printing a notice) when PostgreSQL is not reachable,
/// so callers can skip instead of failing.
pub async fn connect_test_store() -> Option<Store> {
    let config = test_config();

    let store = match Store::from_config(&config).await {
        Ok(store) => store,
        Err(e) => {
            println!("Test skipped (PostgreSQL not reachable): {:#}", e);
            return None;
        }
    };

    sqlx::query("CREATE TABLE IF NOT EXISTS kebabs (id SERIAL PRIMARY KEY, flavor TEXT, price INTEGER)")
        .execute(store.pool())
        .await
        .expect("Failed to create kebabs table");

    Some(store)
}

/// Build a router with the full route table against the test database.
///
/// Also returns the store so tests can inspect rows directly.
pub async fn setup_test_app() -> Option<(Router, Store)> {
    let store = connect_test_store().await?;

    let state = AppState {
        store: store.clone(),
        config: Arc::new(test_config()),
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
        .with_state(state);

    Some((app, store))
}
