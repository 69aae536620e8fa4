//! Queue synchronization engine for WatchQueue
//!
//! `wqengine` orchestrates the playback queue: restore from the local store
//! when it holds anything, fall back to the remote queue document otherwise,
//! consume entries as playback finishes and honor manual navigation. Every
//! state transition is pushed to registered callbacks and to a broadcast
//! channel.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use std::sync::Arc;
//! use wqengine::QueueEngine;
//! use wqsource::GistQueueClient;
//! use wqstore::MemoryQueueStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(MemoryQueueStore::new());
//!     let client = GistQueueClient::new().await?;
//!     let engine = QueueEngine::new(store, client);
//!
//!     engine.load().await?;
//!     if let Some(video) = engine.current().await {
//!         println!("Now playing: {}", video.url);
//!     }
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod events;
mod state;

#[cfg(feature = "wqconfig")]
mod config_ext;

pub use engine::{EngineBuilder, QueueEngine, DEFAULT_LOAD_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use events::{QueueEvent, QueueEventEnvelope};
pub use state::QueueState;

#[cfg(feature = "wqconfig")]
pub use config_ext::EngineConfigExt;

// Ré-export pratique pour les consommateurs du moteur
pub use wqstore::VideoItem;
