//! Relay endpoint for uploaded data files.
//!
//! The browser cannot call the ingestion hook directly (CORS), so it posts
//! the CDN URL here and the server forwards it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use contracts::webhook::{WebhookError, WebhookRequest, WebhookSuccess};

use crate::shared::state::AppState;

type RelayError = (StatusCode, Json<WebhookError>);

fn error(status: StatusCode, message: String) -> RelayError {
    (status, Json(WebhookError { error: message }))
}

/// POST /api/webhook
pub async fn relay(
    State(state): State<AppState>,
    Json(payload): Json<WebhookRequest>,
) -> Result<Json<WebhookSuccess>, RelayError> {
    let file_url = match payload.file_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return Err(error(
                StatusCode::BAD_REQUEST,
                "File URL is required".to_string(),
            ))
        }
    };

    tracing::info!("relaying file url to ingestion hook: {}", file_url);

    let response = state
        .client
        .post(&state.webhook_url)
        .json(&json!({ "fileUrl": file_url }))
        .send()
        .await
        .map_err(|e| {
            tracing::error!("ingestion hook unreachable: {}", e);
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to reach ingestion hook: {}", e),
            )
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("ingestion hook responded with status {}", status);
        return Err(error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Ingestion hook responded with status: {}", status),
        ));
    }

    // Some hooks answer with plain text; treat any non-JSON body as null.
    let data = response.json::<Value>().await.unwrap_or(Value::Null);
    Ok(Json(WebhookSuccess {
        success: true,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new("http://127.0.0.1:0/hook".to_string())
    }

    #[tokio::test]
    async fn missing_file_url_is_rejected() {
        let result = relay(State(state()), Json(WebhookRequest { file_url: None })).await;
        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "File URL is required");
    }

    #[tokio::test]
    async fn blank_file_url_is_rejected() {
        let request = WebhookRequest {
            file_url: Some("   ".to_string()),
        };
        let result = relay(State(state()), Json(request)).await;
        let (status, _) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreachable_hook_maps_to_server_error() {
        let request = WebhookRequest {
            file_url: Some("https://ucarecdn.com/uuid/data.csv".to_string()),
        };
        let result = relay(State(state()), Json(request)).await;
        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.starts_with("Failed to reach"));
    }
}
