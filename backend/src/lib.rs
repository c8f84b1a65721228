//! # PKB Dashboard Backend
//!
//! Serves an interactive summary of a regional vehicle tax (PKB) extract.
//!
//! The backend is split in three layers:
//! ```text
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (cascading filter, aggregation, formatting)
//!     ↓
//! Storage Layer (CSV loading)
//! ```
//!
//! The extract is loaded once at start-up into an immutable [`Table`] that
//! every request reads from. Nothing is written back.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::domain::models::Table;
use crate::domain::{DashboardService, DashboardSettings};
use crate::storage::{CsvConnection, CsvTableRepository, TableStorage};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Table>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    pub fn new(table: Arc<Table>, settings: DashboardSettings) -> Self {
        Self {
            table,
            dashboard_service: Arc::new(DashboardService::new(settings)),
        }
    }
}

/// Load the configured CSV extract and build the application state
pub async fn initialize_backend(config: &DashboardConfig) -> Result<AppState> {
    info!("Setting up storage");
    let repository = CsvTableRepository::new(CsvConnection::new(&config.data_path), config.load_options());
    initialize_with_storage(&repository, config.dashboard_settings()).await
}

pub async fn initialize_with_storage(storage: &dyn TableStorage, settings: DashboardSettings) -> Result<AppState> {
    info!("Loading data from {}", storage.describe());
    let table = storage
        .load_table()
        .await
        .with_context(|| format!("failed to load {}", storage.describe()))?;

    if table.is_empty() {
        warn!("Data source has no rows, the dashboard will be empty");
    }
    info!(
        rows = table.len(),
        extra_columns = table.extra_columns().len(),
        "Setting up domain model"
    );

    Ok(AppState::new(Arc::new(table), settings))
}

/// Create the application router with the API under `/api`
pub fn create_router(app_state: AppState, config: &DashboardConfig) -> Router {
    let cors = match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            warn!(
                "allowed_origin '{}' is not a valid header value, allowing any origin",
                config.allowed_origin
            );
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET, Method::POST])
    .allow_headers(Any);

    let mut app = Router::new().nest("/api", io::rest::api_router());
    if let Some(static_dir) = &config.static_dir {
        info!("Serving front end from {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::{TestEnvironment, SAMPLE_CSV};
    use crate::storage::LoadError;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn config_for(env: &TestEnvironment, file: &str) -> DashboardConfig {
        DashboardConfig {
            data_path: env.path(file),
            ..DashboardConfig::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_backend_loads_table() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_file("data_kendaraan.csv", SAMPLE_CSV)?;

        let app_state = initialize_backend(&config_for(&env, "data_kendaraan.csv")).await?;
        assert_eq!(app_state.table.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_column_stops_start_up() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_file("data_kendaraan.csv", "KECAMATAN,KELURAHAN,RT,JUMLAH_KENDARAAN\nA,X,1,2\n")?;

        let error = match initialize_backend(&config_for(&env, "data_kendaraan.csv")).await {
            Ok(_) => panic!("expected a schema error"),
            Err(error) => error,
        };
        let schema = error
            .downcast_ref::<LoadError>()
            .and_then(LoadError::schema)
            .expect("schema error in chain");
        assert_eq!(schema.missing, vec!["POKOK_PKB".to_string()]);
        assert!(format!("{:#}", error).contains("POKOK_PKB"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cloned_state_shares_table_and_service() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_file("data_kendaraan.csv", SAMPLE_CSV)?;

        let app_state = initialize_backend(&config_for(&env, "data_kendaraan.csv")).await?;
        let cloned = app_state.clone();
        assert!(Arc::ptr_eq(&app_state.table, &cloned.table));
        assert!(Arc::ptr_eq(&app_state.dashboard_service, &cloned.dashboard_service));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_stops_start_up() -> Result<()> {
        let env = TestEnvironment::new()?;
        let result = initialize_backend(&config_for(&env, "absent.csv")).await;
        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_not_found() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_file("data_kendaraan.csv", SAMPLE_CSV)?;
        let config = config_for(&env, "data_kendaraan.csv");
        let app = create_router(initialize_backend(&config).await?, &config);

        let response = app
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_static_files_served_from_configured_dir() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_file("data_kendaraan.csv", SAMPLE_CSV)?;
        env.write_file("index.html", "<h1>PKB</h1>")?;
        let config = DashboardConfig {
            static_dir: Some(env.base_directory().to_path_buf()),
            ..config_for(&env, "data_kendaraan.csv")
        };
        let app = create_router(initialize_backend(&config).await?, &config);

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
