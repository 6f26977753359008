/// Domain types for Moody Player
mod ids;
mod song;

pub use ids::SongId;
pub use song::{NewSong, Song};
