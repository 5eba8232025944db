//! Request/response types for the `/api/webhook` relay endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// CDN URL of the uploaded file to forward upstream.
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSuccess {
    pub success: bool,
    /// Whatever JSON the upstream webhook answered with.
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_missing_file_url() {
        let req: WebhookRequest = serde_json::from_str("{}").unwrap();
        assert!(req.file_url.is_none());
    }

    #[test]
    fn request_uses_camel_case_key() {
        let req: WebhookRequest =
            serde_json::from_str(r#"{"fileUrl": "https://ucarecdn.com/x/y.csv"}"#).unwrap();
        assert_eq!(req.file_url.as_deref(), Some("https://ucarecdn.com/x/y.csv"));
    }
}
