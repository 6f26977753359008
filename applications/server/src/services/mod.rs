/// Server services
pub mod media_store;

pub use media_store::{HttpMediaStore, MediaStore, StoredMedia};
