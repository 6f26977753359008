//! Mood feed: the song list the player renders
//!
//! Mood changes arrive faster than queries complete, so each refresh is
//! stamped with a monotonically increasing sequence number before its
//! request is sent. A response only replaces the list if no later refresh
//! has already been applied; stale responses are discarded. A failed
//! refresh never touches the list.

use crate::catalog::CatalogClient;
use crate::error::Result;
use moody_core::Song;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Default)]
struct FeedState {
    applied_seq: u64,
    songs: Vec<Song>,
}

/// Latest-wins view over mood-filtered song queries.
pub struct MoodFeed {
    client: Arc<CatalogClient>,
    next_seq: AtomicU64,
    state: RwLock<FeedState>,
}

impl MoodFeed {
    /// Create an empty feed over the given client.
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            next_seq: AtomicU64::new(0),
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Refresh the feed with songs for the given mood.
    ///
    /// Concurrent refreshes may complete out of order; only the response
    /// belonging to the newest refresh ever lands. On error the current
    /// list is left untouched and the error is returned to the caller.
    pub async fn refresh(&self, mood: &str) -> Result<()> {
        // Stamp before the request goes out, so ordering reflects when the
        // refresh was requested rather than when it completed.
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;

        match self.client.songs_by_mood(Some(mood)).await {
            Ok(songs) => {
                let mut state = self.state.write().await;
                if seq > state.applied_seq {
                    debug!(seq, mood, count = songs.len(), "Applying feed refresh");
                    state.applied_seq = seq;
                    state.songs = songs;
                } else {
                    debug!(seq, applied = state.applied_seq, mood, "Discarding stale refresh");
                }
                Ok(())
            }
            Err(e) => {
                warn!(seq, mood, error = %e, "Feed refresh failed, keeping current list");
                Err(e)
            }
        }
    }

    /// Snapshot of the current song list.
    pub async fn songs(&self) -> Vec<Song> {
        self.state.read().await.songs.clone()
    }

    /// Whether the feed currently holds no songs.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.songs.is_empty()
    }
}
