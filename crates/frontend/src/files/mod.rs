//! Admin page for distributing CSV data files.
//!
//! A picked file goes to the CDN first, then its URL is relayed to the
//! backend webhook endpoint which forwards it to the ingestion pipeline.
//! Recent uploads are kept in localStorage so the page shows history across
//! visits.

use chrono::{DateTime, Utc};
use contracts::webhook::WebhookRequest;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::chat::upload;
use crate::shared::api_utils::api_url;
use crate::shared::storage::{BrowserStorage, KeyValueStore};

const UPLOADS_KEY: &str = "aria-file-uploads";
const HISTORY_LIMIT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadStatus {
    Complete,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub file_name: String,
    pub file_url: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub status: UploadStatus,
}

fn is_csv(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".csv")
}

fn load_records<S: KeyValueStore>(store: &S) -> Vec<UploadRecord> {
    store
        .get(UPLOADS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_records<S: KeyValueStore>(store: &S, records: &[UploadRecord]) -> Result<(), String> {
    let raw = serde_json::to_string(records)
        .map_err(|e| format!("failed to serialize upload history: {e}"))?;
    store.set(UPLOADS_KEY, &raw)
}

/// Relay an uploaded file URL to the backend webhook.
async fn relay_to_webhook(file_url: &str) -> Result<(), String> {
    let body = WebhookRequest {
        file_url: Some(file_url.to_string()),
    };
    let response = Request::post(&api_url("/api/webhook"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("Webhook returned status {}", response.status()))
    }
}

#[component]
pub fn FilesPage() -> impl IntoView {
    let records = RwSignal::new(load_records(&BrowserStorage));
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let is_uploading = RwSignal::new(false);
    let notice = RwSignal::new(None::<(bool, String)>);

    let push_record = move |record: UploadRecord| {
        records.update(|list| {
            list.insert(0, record);
            list.truncate(HISTORY_LIMIT);
        });
        let result = records.with_untracked(|list| save_records(&BrowserStorage, list));
        if let Err(e) = result {
            log::error!("failed to persist upload history: {e}");
        }
    };

    let do_upload = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        if !is_csv(&file.name()) {
            notice.set(Some((false, "Please select a CSV file.".to_string())));
            return;
        }
        notice.set(None);

        spawn_local(async move {
            is_uploading.set(true);
            let uploaded = upload::upload_file(&file).await;
            let result = match &uploaded {
                Ok(att) => relay_to_webhook(&att.file_url).await,
                Err(e) => Err(e.clone()),
            };
            is_uploading.set(false);
            selected_file.set(None);

            match (uploaded, result) {
                (Ok(att), Ok(())) => {
                    push_record(UploadRecord {
                        file_name: att.file_name.clone(),
                        file_url: att.file_url.clone(),
                        file_size: att.file_size,
                        uploaded_at: Utc::now(),
                        status: UploadStatus::Complete,
                    });
                    notice.set(Some((true, format!("{} uploaded and relayed.", att.file_name))));
                }
                (Ok(att), Err(e)) => {
                    log::error!("webhook relay failed: {e}");
                    push_record(UploadRecord {
                        file_name: att.file_name.clone(),
                        file_url: att.file_url.clone(),
                        file_size: att.file_size,
                        uploaded_at: Utc::now(),
                        status: UploadStatus::Failed,
                    });
                    notice.set(Some((false, "Upload stored but relaying failed.".to_string())));
                }
                (Err(e), _) => {
                    log::error!("file upload failed: {e}");
                    notice.set(Some((false, "Error uploading file. Please try again.".to_string())));
                }
            }
        });
    };

    view! {
        <div class="files-page">
            <header class="files-page__header">
                <h1>"Data Files"</h1>
                <p>"Upload CSV files to feed the program catalogue."</p>
            </header>

            {move || {
                notice
                    .get()
                    .map(|(ok, text)| {
                        let class = if ok {
                            "files-page__notice files-page__notice--ok"
                        } else {
                            "files-page__notice files-page__notice--error"
                        };
                        view! { <div class=class>{text}</div> }
                    })
            }}

            <div class="files-page__picker">
                <input
                    type="file"
                    accept=".csv"
                    disabled=move || is_uploading.get()
                    on:change=move |ev| {
                        let target = event_target::<web_sys::HtmlInputElement>(&ev);
                        selected_file.set(target.files().and_then(|list| list.get(0)));
                    }
                />
                <button
                    class="files-page__upload"
                    disabled=move || {
                        is_uploading.get() || selected_file.with(|f| f.is_none())
                    }
                    on:click=do_upload
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>

            <h2 class="files-page__history-title">"Recent uploads"</h2>
            <Show
                when=move || records.with(|r| !r.is_empty())
                fallback=|| view! { <p class="files-page__empty">"No uploads yet."</p> }
            >
                <ul class="files-page__history">
                    <For each=move || records.get() key=|r| r.file_url.clone() children=|r: UploadRecord| {
                        let status = match r.status {
                            UploadStatus::Complete => "complete",
                            UploadStatus::Failed => "failed",
                        };
                        let size = upload::format_file_size(r.file_size);
                        view! {
                            <li class="files-page__entry">
                                <a href=r.file_url.clone() target="_blank">
                                    {r.file_name.clone()}
                                </a>
                                <span class="files-page__meta">
                                    {size} " \u{00b7} " {r.uploaded_at.format("%Y-%m-%d %H:%M").to_string()}
                                </span>
                                <span class=format!(
                                    "files-page__status files-page__status--{status}",
                                )>{status}</span>
                            </li>
                        }
                    } />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    fn record(name: &str) -> UploadRecord {
        UploadRecord {
            file_name: name.to_string(),
            file_url: format!("https://ucarecdn.com/uuid/{name}"),
            file_size: 1024,
            uploaded_at: Utc::now(),
            status: UploadStatus::Complete,
        }
    }

    #[test]
    fn csv_detection_ignores_case() {
        assert!(is_csv("programs.csv"));
        assert!(is_csv("PROGRAMS.CSV"));
        assert!(!is_csv("programs.xlsx"));
        assert!(!is_csv("csv"));
    }

    #[test]
    fn upload_history_round_trips() {
        let store = MemoryStorage::default();
        let records = vec![record("a.csv"), record("b.csv")];
        save_records(&store, &records).unwrap();
        assert_eq!(load_records(&store), records);
    }

    #[test]
    fn corrupted_history_is_treated_as_empty() {
        let store = MemoryStorage::default();
        store.set(UPLOADS_KEY, "[{oops").unwrap();
        assert!(load_records(&store).is_empty());
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&record("a.csv")).unwrap();
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"uploadedAt\""));
        assert!(json.contains("\"status\":\"complete\""));
    }
}
