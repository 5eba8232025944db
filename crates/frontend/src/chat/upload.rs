//! Client for the Uploadcare CDN.
//!
//! Transfers one file per call and derives a directly fetchable URL. Errors
//! propagate to the view, which owns the user-facing message; a second upload
//! while one is pending is prevented at the UI layer by disabling the
//! control.

use gloo_net::http::Request;
use serde::Deserialize;

use contracts::chat::FileAttachment;

const UPLOAD_ENDPOINT: &str = "https://upload.uploadcare.com/base/";
const PUBLIC_KEY: &str = "549b3f0502ec4b4c7c20";
pub const CDN_BASE: &str = "https://ucarecdn.com";

#[derive(Debug, Deserialize)]
struct BaseUploadResponse {
    /// UUID assigned by the upload service.
    file: String,
}

/// Build the CDN URL for an uploaded file. The filename is percent-encoded
/// so names with spaces or reserved characters still resolve.
pub fn cdn_url(uuid: &str, file_name: &str) -> String {
    format!("{CDN_BASE}/{uuid}/{}", urlencoding::encode(file_name))
}

/// Upload a file and return its attachment record.
pub async fn upload_file(file: &web_sys::File) -> Result<FileAttachment, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to create form data")?;
    form.append_with_str("UPLOADCARE_PUB_KEY", PUBLIC_KEY)
        .map_err(|_| "failed to build upload form")?;
    form.append_with_str("UPLOADCARE_STORE", "auto")
        .map_err(|_| "failed to build upload form")?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "failed to attach file to form")?;

    let response = Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| format!("Failed to build upload request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to upload file: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Upload service responded with status: {}",
            response.status()
        ));
    }

    let parsed = response
        .json::<BaseUploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse upload response: {e}"))?;

    log::info!("file uploaded: {} -> {}", file.name(), parsed.file);

    Ok(FileAttachment {
        file_url: cdn_url(&parsed.file, &file.name()),
        file_id: parsed.file,
        file_name: file.name(),
        file_type: file.type_(),
        file_size: file.size() as u64,
    })
}

/// Human-readable file size for previews.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_url_percent_encodes_spaces() {
        let url = cdn_url("abc-123", "My Report.pdf");
        assert_eq!(url, "https://ucarecdn.com/abc-123/My%20Report.pdf");
    }

    #[test]
    fn cdn_url_encodes_reserved_characters() {
        let url = cdn_url("abc", "results 50%.csv");
        assert!(!url.contains(' '));
        assert!(url.contains("results%2050%25.csv"));
    }

    #[test]
    fn plain_filenames_pass_through_unchanged() {
        assert_eq!(cdn_url("u", "essay.pdf"), "https://ucarecdn.com/u/essay.pdf");
    }

    #[test]
    fn file_sizes_format_in_sensible_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
