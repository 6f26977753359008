//! Main catalog client for the Moody Player backend.

use crate::error::{CatalogClientError, Result};
use crate::types::SongsResponse;
use crate::upload::UploadClient;
use moody_core::Song;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Moody Player catalog API.
///
/// Covers the two backend operations: querying songs (optionally filtered
/// by mood) and uploading new songs with their audio file.
///
/// # Example
///
/// ```ignore
/// use moody_server_client::CatalogClient;
///
/// let client = CatalogClient::new("https://moody.example.com")?;
///
/// // Songs for the current mood
/// let songs = client.songs_by_mood(Some("happy")).await?;
/// println!("Found {} happy songs", songs.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client for the given backend URL.
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            return Err(CatalogClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Normalize: strip trailing slash, require an http(s) scheme
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MoodyPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the backend URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch songs, optionally filtered to a single mood.
    ///
    /// `None` returns the entire catalog. The mood filter is exact and
    /// case-sensitive; an unknown mood yields an empty list, not an error.
    pub async fn songs_by_mood(&self, mood: Option<&str>) -> Result<Vec<Song>> {
        let url = format!("{}/songs", self.base_url);

        debug!(url = %url, mood = ?mood, "Fetching songs");

        let mut request = self.http.get(&url);
        if let Some(mood) = mood {
            request = request.query(&[("mood", mood)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogClientError::ServerUnreachable(e.to_string())
            } else {
                CatalogClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let body: SongsResponse = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse songs response: {}", e))
            })?;

            info!(count = body.songs.len(), mood = ?mood, "Fetched songs");

            Ok(body.songs)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get an upload client for uploading songs.
    pub fn upload(&self) -> UploadClient<'_> {
        UploadClient::new(&self.http, &self.base_url)
    }
}
