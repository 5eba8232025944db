//! Client for the remote inference endpoint.
//!
//! One request per call, 30-second client-side timeout. Transport failures,
//! non-2xx statuses, and timeouts all fold into the same `{text}` result
//! shape so the chat view never needs a separate error branch.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use contracts::chat::FileAttachment;

const INFERENCE_ENDPOINT: &str =
    "https://flowise-15g2.onrender.com/api/v1/prediction/b721f8af-6063-4d4a-9b88-ae206549ad4d";
const REQUEST_TIMEOUT_MS: u32 = 30_000;

pub const TIMEOUT_TEXT: &str = "Request timed out. The server took too long to respond.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_config: Option<OverrideConfig>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_detailed_streaming: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub text: String,
}

impl PredictionRequest {
    /// Standard chat request bound to a conversation's session id.
    pub fn for_session(question: String, session_id: &str) -> Self {
        Self {
            question,
            override_config: Some(OverrideConfig {
                session_id: Some(session_id.to_string()),
                max_iterations: Some(1),
                enable_detailed_streaming: Some(true),
                ..Default::default()
            }),
        }
    }
}

/// Assemble the question actually sent upstream for a submission that may
/// carry a file.
///
/// File-only submits instruct the remote system to acknowledge the upload;
/// text+file submits append the file reference to the question.
pub fn build_question(text: &str, attachment: Option<&FileAttachment>) -> String {
    match attachment {
        Some(att) if text.trim().is_empty() => format!(
            "this is the file link and you will tell the user now the file is uploaded successfully: {}",
            att.file_url
        ),
        Some(att) => format!(
            "{} [File: {}, URL: {}]",
            text.trim(),
            att.file_name,
            att.file_url
        ),
        None => text.trim().to_string(),
    }
}

/// Issue one prediction call. Never fails: a timeout or transport error
/// becomes a `{text}` result the view renders as the assistant reply.
pub async fn query(request: &PredictionRequest) -> PredictionResponse {
    let send = send(request);
    pin_mut!(send);
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(timeout);

    match select(send, timeout).await {
        Either::Left((outcome, _)) => fold_outcome(Some(outcome)),
        Either::Right(((), _)) => fold_outcome(None),
    }
}

/// Collapse a call outcome into the `{text}` shape. `None` means the
/// timeout won the race.
fn fold_outcome(outcome: Option<Result<PredictionResponse, String>>) -> PredictionResponse {
    match outcome {
        Some(Ok(response)) => response,
        Some(Err(message)) => PredictionResponse {
            text: format!("Error: {message}"),
        },
        None => PredictionResponse {
            text: TIMEOUT_TEXT.to_string(),
        },
    }
}

/// Best-effort "establish language" notice sent when a conversation is
/// created. The caller spawns this and drops the result by design.
pub async fn prime_language(session_id: &str, language_name: &str) -> Result<(), String> {
    let request = PredictionRequest::for_session(
        format!(
            "The user selected {language_name} as their preferred language. \
             Answer in {language_name} from now on."
        ),
        session_id,
    );
    send(&request).await.map(|_| ())
}

async fn send(request: &PredictionRequest) -> Result<PredictionResponse, String> {
    let response = Request::post(INFERENCE_ENDPOINT)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("API responded with status: {}", response.status()));
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment() -> FileAttachment {
        FileAttachment {
            file_id: "uuid-1".into(),
            file_url: "https://ucarecdn.com/uuid-1/My%20Report.pdf".into(),
            file_name: "My Report.pdf".into(),
            file_type: "application/pdf".into(),
            file_size: 2048,
        }
    }

    #[test]
    fn plain_text_question_passes_through_trimmed() {
        assert_eq!(build_question("  Hello  ", None), "Hello");
    }

    #[test]
    fn file_only_submit_builds_acknowledgement_instruction() {
        let q = build_question("", Some(&attachment()));
        assert!(q.starts_with("this is the file link"));
        assert!(q.ends_with("https://ucarecdn.com/uuid-1/My%20Report.pdf"));
    }

    #[test]
    fn text_with_file_appends_file_reference() {
        let q = build_question("summarize this", Some(&attachment()));
        assert_eq!(
            q,
            "summarize this [File: My Report.pdf, URL: https://ucarecdn.com/uuid-1/My%20Report.pdf]"
        );
    }

    #[test]
    fn successful_outcome_passes_through() {
        let response = fold_outcome(Some(Ok(PredictionResponse {
            text: "Hi there".into(),
        })));
        assert_eq!(response.text, "Hi there");
    }

    #[test]
    fn transport_failure_folds_into_error_text() {
        let response = fold_outcome(Some(Err("Failed to send request: offline".into())));
        assert_eq!(response.text, "Error: Failed to send request: offline");
    }

    #[test]
    fn expired_timeout_folds_into_timeout_text() {
        let response = fold_outcome(None);
        assert_eq!(response.text, TIMEOUT_TEXT);
    }

    #[test]
    fn request_serializes_camel_case_and_omits_unset_fields() {
        let request = PredictionRequest::for_session("Hello".into(), "conv-1");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["question"], "Hello");
        assert_eq!(json["overrideConfig"]["sessionId"], "conv-1");
        assert_eq!(json["overrideConfig"]["maxIterations"], 1);
        assert!(json["overrideConfig"].get("systemMessage").is_none());
    }
}
