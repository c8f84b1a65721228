//! # REST API Interface Layer
//!
//! HTTP endpoints of the dashboard. Every endpoint is a read over the table
//! loaded at start-up, except `POST /api/logs` which forwards front end log
//! lines into the backend's log.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET  | `/api/dashboard` | [`dashboard_apis`] |
//! | GET  | `/api/filters` | [`filter_apis`] |
//! | POST | `/api/filters/select` | [`filter_apis`] |
//! | GET  | `/api/summaries/total` | [`summary_apis`] |
//! | GET  | `/api/summaries/:level/:measure` | [`summary_apis`] |
//! | GET  | `/api/records` | [`record_apis`] |
//! | POST | `/api/logs` | [`logging_apis`] |
//!
//! Selections travel as `region`, `sub_region` and `block` query parameters.
//! Missing or stale values are resolved by the backend and the resolved
//! selection is echoed back in each response.

pub mod dashboard_apis;
pub mod error;
pub mod filter_apis;
pub mod logging_apis;
pub mod mappers;
pub mod record_apis;
pub mod summary_apis;

pub use error::ApiError;

use axum::Router;

use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(dashboard_apis::router())
        .merge(filter_apis::router())
        .merge(summary_apis::router())
        .merge(record_apis::router())
        .merge(logging_apis::router())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use tower::ServiceExt;

    use crate::config::DashboardConfig;
    use crate::domain::models::fixtures::{district_table, sample_table};
    use crate::domain::models::Table;
    use crate::domain::DashboardSettings;
    use crate::{create_router, AppState};

    pub type TestResult = Result<(), Box<dyn std::error::Error>>;

    pub fn router_for(table: Table) -> Router {
        let app_state = AppState::new(Arc::new(table), DashboardSettings::default());
        create_router(app_state, &DashboardConfig::default())
    }

    /// Three rows: A/X/1, A/X/2, B/Y/1
    pub fn sample_router() -> Router {
        router_for(sample_table())
    }

    pub fn district_router() -> Router {
        router_for(district_table())
    }

    pub async fn get_json<T: DeserializeOwned>(
        app: Router,
        uri: &str,
    ) -> Result<(StatusCode, T), Box<dyn std::error::Error>> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        app: Router,
        uri: &str,
        body: &B,
    ) -> Result<(StatusCode, T), Box<dyn std::error::Error>> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method(Method::POST)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(body)?))?,
            )
            .await?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }
}
