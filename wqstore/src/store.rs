//! Capability trait over queue storage backends

use crate::item::VideoItem;
use crate::Result;
use async_trait::async_trait;

/// Interface commune pour tous les backends de stockage de la file
///
/// One implementation exists per deployment target (SQLite for durable
/// storage, memory for tests and ephemeral runs); the engine only ever
/// depends on this trait, wired once at process start.
///
/// Mutating operations persist durably before returning `Ok`. Reads never
/// fault on a corrupt record: it degrades to an empty queue.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Loads the persisted queue, empty if absent or corrupt
    async fn load_queue(&self) -> Result<Vec<VideoItem>>;

    /// Replaces the persisted queue
    async fn save_queue(&self, queue: &[VideoItem]) -> Result<()>;

    /// Drops the persisted queue entirely
    async fn clear_queue(&self) -> Result<()>;

    /// Stamps the last successful remote fetch with the current wall clock
    async fn save_last_fetch_time(&self) -> Result<()>;

    /// Milliseconds since epoch of the last remote fetch, 0 if never set
    async fn last_fetch_time(&self) -> Result<u64>;

    /// Removes every persisted entry carrying `video_id`
    ///
    /// Read-modify-write: loads the persisted queue, filters out the id and
    /// writes back the remainder. Not atomic across concurrent writers
    /// (single-writer assumption).
    async fn remove_video(&self, video_id: &str) -> Result<()> {
        let queue = self.load_queue().await?;
        let remaining: Vec<VideoItem> =
            queue.into_iter().filter(|v| v.id != video_id).collect();
        self.save_queue(&remaining).await
    }
}
