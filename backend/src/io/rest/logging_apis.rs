use axum::{extract::State, response::Json, routing::post, Router};
use tracing::{debug, error, info, warn};

use crate::AppState;
use shared::{LogEntry, LogResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/logs", post(log_message))
}

/// Write a front end log line into the backend log
async fn log_message(
    State(_app_state): State<AppState>,
    Json(entry): Json<LogEntry>,
) -> Json<LogResponse> {
    let component = entry.component.as_deref().unwrap_or("frontend");

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!(component, "{}", entry.message),
        "warn" | "warning" => warn!(component, "{}", entry.message),
        "error" => error!(component, "{}", entry.message),
        // Unknown levels are logged as info
        _ => info!(component, "{}", entry.message),
    }

    Json(LogResponse { success: true })
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{post_json, sample_router, TestResult};
    use axum::http::StatusCode;
    use shared::{LogEntry, LogResponse};

    #[tokio::test]
    async fn test_log_message() -> TestResult {
        let entry = LogEntry {
            level: "WARN".to_string(),
            message: "chart failed to render".to_string(),
            component: Some("charts".to_string()),
        };
        let (status, response): (_, LogResponse) = post_json(sample_router(), "/api/logs", &entry).await?;

        assert_eq!(status, StatusCode::OK);
        assert!(response.success);
        Ok(())
    }
}
