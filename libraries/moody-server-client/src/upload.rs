//! Song upload operations for the Moody Player backend.

use crate::error::{CatalogClientError, Result};
use crate::types::{SongMetadata, UploadResponse};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Upload client for the Moody Player backend.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Upload a song from an audio file on disk.
    ///
    /// # Arguments
    /// * `file_path` - Path to the audio file
    /// * `metadata` - Title, artist and mood to store with the song
    pub async fn upload_song(
        &self,
        file_path: &Path,
        metadata: &SongMetadata,
    ) -> Result<UploadResponse> {
        if !file_path.exists() {
            return Err(CatalogClientError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("song")
            .to_string();

        debug!(file = %file_path.display(), "Uploading song");

        let mut file = File::open(file_path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        self.upload_song_bytes(&file_name, mime_type_for_file(file_path), contents, metadata)
            .await
    }

    /// Upload a song from in-memory audio bytes.
    pub async fn upload_song_bytes(
        &self,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
        metadata: &SongMetadata,
    ) -> Result<UploadResponse> {
        let file_size = contents.len();

        let file_part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;

        let form = Form::new()
            .part("audio", file_part)
            .text("title", metadata.title.clone())
            .text("artist", metadata.artist.clone())
            .text("mood", metadata.mood.clone());

        let url = format!("{}/songs", self.base_url);

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();

        if status.is_success() {
            let upload_response: UploadResponse = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse upload response: {}", e))
            })?;

            info!(
                song_id = %upload_response.song.id,
                file = %file_name,
                size = file_size,
                mood = %upload_response.song.mood,
                "Song uploaded"
            );

            Ok(upload_response)
        } else if status.as_u16() == 413 {
            Err(CatalogClientError::ServerError {
                status: 413,
                message: "File too large".to_string(),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Get MIME type for an audio file.
fn mime_type_for_file(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
