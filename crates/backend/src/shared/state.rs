/// Shared handler state: one HTTP client for the process plus the
/// configured ingestion endpoint.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub webhook_url: String,
}

impl AppState {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}
