//! Song catalog queries
//!
//! Vertical slice owning all SQL that touches the `songs` table.

use crate::error::Result;
use chrono::{DateTime, Utc};
use moody_core::{NewSong, Song, SongId};
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
struct SongRow {
    id: String,
    title: String,
    artist: String,
    mood: String,
    audio_url: String,
    created_at: DateTime<Utc>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: SongId::new(row.id),
            title: row.title,
            artist: row.artist,
            mood: row.mood,
            audio_url: row.audio_url,
            created_at: row.created_at,
        }
    }
}

/// Persist a new song record
///
/// Assigns a generated id and the current timestamp, returns the stored
/// record.
pub async fn create(pool: &SqlitePool, new_song: NewSong) -> Result<Song> {
    let song = Song {
        id: SongId::generate(),
        title: new_song.title,
        artist: new_song.artist,
        mood: new_song.mood,
        audio_url: new_song.audio_url,
        created_at: Utc::now(),
    };

    sqlx::query(
        r"
        INSERT INTO songs (id, title, artist, mood, audio_url, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(song.id.as_str())
    .bind(&song.title)
    .bind(&song.artist)
    .bind(&song.mood)
    .bind(&song.audio_url)
    .bind(song.created_at)
    .execute(pool)
    .await?;

    tracing::debug!(id = %song.id, mood = %song.mood, "Song persisted");

    Ok(song)
}

/// Get all songs tagged with the given mood
///
/// Exact string match, case sensitive, no normalization.
pub async fn get_by_mood(pool: &SqlitePool, mood: &str) -> Result<Vec<Song>> {
    let rows: Vec<SongRow> = sqlx::query_as(
        r"
        SELECT id, title, artist, mood, audio_url, created_at
        FROM songs
        WHERE mood = ?
        ORDER BY created_at
        ",
    )
    .bind(mood)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Song::from).collect())
}

/// Get all songs in the catalog
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows: Vec<SongRow> = sqlx::query_as(
        r"
        SELECT id, title, artist, mood, audio_url, created_at
        FROM songs
        ORDER BY created_at
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Song::from).collect())
}
