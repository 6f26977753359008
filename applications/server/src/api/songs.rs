/// Songs API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use moody_core::{NewSong, Song};
use moody_storage::songs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SongQuery {
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SongsResponse {
    pub message: String,
    pub songs: Vec<Song>,
}

#[derive(Debug, Serialize)]
pub struct UploadSongResponse {
    pub message: String,
    pub song: Song,
}

/// GET /songs
///
/// With `?mood=` returns only songs tagged with that exact mood; without it
/// the entire catalog. An unknown mood yields an empty list, not an error.
pub async fn list_songs(
    State(app_state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> Result<Json<SongsResponse>> {
    let songs = match query.mood.as_deref() {
        Some(mood) => songs::get_by_mood(&app_state.pool, mood).await?,
        None => songs::get_all(&app_state.pool).await?,
    };

    Ok(Json(SongsResponse {
        message: "songs fetched successfully".to_string(),
        songs,
    }))
}

/// POST /songs
///
/// Upload a song: multipart form with an `audio` file plus `title`,
/// `artist` and `mood` text fields. The audio binary goes to the media
/// store first; its URL is then persisted with the metadata. If the
/// metadata write fails the stored file is deleted again so the two stores
/// stay consistent.
pub async fn upload_song(
    State(app_state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<UploadSongResponse>> {
    let fields = parse_upload_form(&headers, body, app_state.max_upload_bytes).await?;

    let stored = app_state
        .media_store
        .store(&fields.file_name, fields.file_data)
        .await?;

    let new_song = NewSong {
        title: fields.title,
        artist: fields.artist,
        mood: fields.mood,
        audio_url: stored.url,
    };

    let song = match songs::create(&app_state.pool, new_song).await {
        Ok(song) => song,
        Err(e) => {
            // Compensate: remove the already-stored file so no orphan is
            // left behind
            tracing::warn!(file_id = %stored.file_id, error = %e, "Metadata write failed, deleting stored file");
            if let Err(delete_err) = app_state.media_store.delete(&stored.file_id).await {
                return Err(ServerError::PartialUpload(format!(
                    "metadata write failed ({}) and file cleanup failed ({})",
                    e, delete_err
                )));
            }
            return Err(e.into());
        }
    };

    tracing::info!(song_id = %song.id, mood = %song.mood, "Song uploaded");

    Ok(Json(UploadSongResponse {
        message: "Song uploaded successfully".to_string(),
        song,
    }))
}

struct UploadFields {
    file_name: String,
    file_data: Vec<u8>,
    title: String,
    artist: String,
    mood: String,
}

/// Parse the multipart upload form, rejecting requests with missing fields.
async fn parse_upload_form(
    headers: &axum::http::HeaderMap,
    body: axum::body::Bytes,
    max_bytes: usize,
) -> Result<UploadFields> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| ServerError::BadRequest("Missing boundary".to_string()))?;

    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut file_name: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;
    let mut title: Option<String> = None;
    let mut artist: Option<String> = None;
    let mut mood: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "audio" => {
                file_name = Some(field.file_name().unwrap_or("song").to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ServerError::BadRequest(format!("Failed to read file: {}", e)))?
                    .to_vec();

                if data.len() > max_bytes {
                    return Err(ServerError::BadRequest("File too large".to_string()));
                }

                file_data = Some(data);
            }
            "title" => {
                title = Some(read_text_field(field, "title").await?);
            }
            "artist" => {
                artist = Some(read_text_field(field, "artist").await?);
            }
            "mood" => {
                mood = Some(read_text_field(field, "mood").await?);
            }
            _ => {}
        }
    }

    let file_name =
        file_name.ok_or_else(|| ServerError::BadRequest("Missing audio file".to_string()))?;
    let file_data = file_data
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Missing audio file".to_string()))?;
    let title = title.ok_or_else(|| missing_field("title"))?;
    let artist = artist.ok_or_else(|| missing_field("artist"))?;
    let mood = mood.ok_or_else(|| missing_field("mood"))?;

    Ok(UploadFields {
        file_name,
        file_data,
        title,
        artist,
        mood,
    })
}

async fn read_text_field(field: multer::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to read {}: {}", name, e)))
}

fn missing_field(name: &str) -> ServerError {
    ServerError::BadRequest(format!("Missing required field: {}", name))
}
