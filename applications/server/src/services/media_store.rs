/// Media store service
///
/// Uploaded audio files live in an external media store, not on this
/// server. The store keeps the binary and hands back a streamable URL plus
/// a file id used for deletes.
use crate::config::MediaSettings;
use crate::error::{Result, ServerError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// A file accepted by the media store.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    /// Store-assigned id, needed to delete the file later
    pub file_id: String,

    /// Streamable URL of the uploaded file
    pub url: String,
}

/// Abstraction over the external media store.
///
/// The HTTP implementation talks to the real store; tests substitute an
/// in-process fake.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store an audio file, returning its id and streamable URL.
    async fn store(&self, file_name: &str, data: Vec<u8>) -> Result<StoredMedia>;

    /// Delete a previously stored file.
    async fn delete(&self, file_id: &str) -> Result<()>;
}

/// HTTP client for an ImageKit-style media store API.
pub struct HttpMediaStore {
    http: reqwest::Client,
    api_base: String,
    private_key: String,
    folder: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResult {
    file_id: String,
    url: String,
}

impl HttpMediaStore {
    /// Create a new client from media settings.
    pub fn new(settings: &MediaSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ServerError::MediaStore(e.to_string()))?;

        Ok(Self {
            http,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            private_key: settings.private_key.clone(),
            folder: settings.folder.clone(),
        })
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn store(&self, file_name: &str, data: Vec<u8>) -> Result<StoredMedia> {
        // Store files under a random name; the original name only supplies
        // the extension
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp3");
        let stored_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);

        let file_part = Part::bytes(data)
            .file_name(stored_name.clone())
            .mime_str("application/octet-stream")
            .map_err(|e| ServerError::MediaStore(e.to_string()))?;

        let form = Form::new()
            .part("file", file_part)
            .text("fileName", stored_name.clone())
            .text("folder", self.folder.clone());

        let url = format!("{}/files/upload", self.api_base);

        tracing::debug!(file = %stored_name, "Uploading file to media store");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ServerError::MediaStore(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServerError::MediaStore(format!(
                "upload failed with status {}: {}",
                status, body
            )));
        }

        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| ServerError::MediaStore(format!("invalid upload response: {}", e)))?;

        tracing::info!(file_id = %result.file_id, file = %stored_name, "File stored");

        Ok(StoredMedia {
            file_id: result.file_id,
            url: result.url,
        })
    }

    async fn delete(&self, file_id: &str) -> Result<()> {
        let url = format!("{}/files/{}", self.api_base, file_id);

        let response = self
            .http
            .delete(&url)
            .basic_auth(&self.private_key, Some(""))
            .send()
            .await
            .map_err(|e| ServerError::MediaStore(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServerError::MediaStore(format!(
                "delete failed with status {}: {}",
                status, body
            )));
        }

        tracing::info!(file_id = %file_id, "File deleted from media store");

        Ok(())
    }
}
