//! # wqstore - Persistent storage for the WatchQueue playback queue
//!
//! This crate owns the durable side of the queue: an ordered list of
//! [`VideoItem`]s and the timestamp of the last remote fetch, surviving
//! process restarts. It provides:
//! - [`QueueStore`]: the storage capability trait the engine depends on
//! - [`SqliteQueueStore`]: durable implementation backed by SQLite
//! - [`MemoryQueueStore`]: volatile implementation for tests and ephemeral runs
//!
//! The backend is chosen once at process start; business logic only ever
//! sees the trait.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use wqstore::{QueueStore, SqliteQueueStore, VideoItem};
//!
//! # #[tokio::main]
//! # async fn main() -> wqstore::Result<()> {
//! let store = SqliteQueueStore::new(std::path::Path::new("queue.db"))?;
//!
//! store
//!     .save_queue(&[VideoItem::new("abc", "https://youtu.be/abc")])
//!     .await?;
//!
//! let queue = store.load_queue().await?;
//! println!("{} video(s) pending", queue.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod item;
mod memory;
mod sqlite;
mod store;

#[cfg(feature = "wqconfig")]
mod config_ext;

// Réexports publics
pub use error::{Error, Result};
pub use item::VideoItem;
pub use memory::MemoryQueueStore;
pub use sqlite::{SqliteQueueStore, LAST_FETCH_KEY, QUEUE_KEY};
pub use store::QueueStore;

#[cfg(feature = "wqconfig")]
pub use config_ext::StoreConfigExt;
