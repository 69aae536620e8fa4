//! Stockage volatile de la file en mémoire

use crate::item::VideoItem;
use crate::store::QueueStore;
use crate::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Volatile queue store keeping everything in process memory
///
/// Used by tests and ephemeral runs; same contract as the durable store,
/// minus the durability.
#[derive(Default)]
pub struct MemoryQueueStore {
    queue: RwLock<Vec<VideoItem>>,
    last_fetch_ms: AtomicU64,
}

impl MemoryQueueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueueStore for MemoryQueueStore {
    async fn load_queue(&self) -> Result<Vec<VideoItem>> {
        Ok(self.queue.read().unwrap().clone())
    }

    async fn save_queue(&self, queue: &[VideoItem]) -> Result<()> {
        *self.queue.write().unwrap() = queue.to_vec();
        Ok(())
    }

    async fn clear_queue(&self) -> Result<()> {
        self.queue.write().unwrap().clear();
        Ok(())
    }

    async fn save_last_fetch_time(&self) -> Result<()> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.last_fetch_ms.store(now_ms, Ordering::SeqCst);
        Ok(())
    }

    async fn last_fetch_time(&self) -> Result<u64> {
        Ok(self.last_fetch_ms.load(Ordering::SeqCst))
    }
}
