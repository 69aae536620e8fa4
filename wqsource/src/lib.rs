//! Remote queue source for WatchQueue
//!
//! This crate talks to the remote side of the queue: a JSON document
//! (hosted as a gist) listing raw video URLs, and the pure extraction step
//! turning those URLs into canonical video identifiers.
//!
//! # Features
//!
//! - **Document Fetch**: HTTP retrieval of `{ "queue": ["<url>", ...] }`;
//!   a well-formed document missing the `queue` field counts as empty
//! - **Identifier Extraction**: pure URL-to-id mapping recognizing
//!   `youtube.com/watch?v=` and `youtu.be/` shapes
//! - **Builder**: configurable document URL, timeout, user agent, proxy
//! - **Configuration Extension**: gist settings stored through wqconfig
//!
//! # Example
//!
//! ```no_run
//! use wqsource::{extract_video_id, GistQueueClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GistQueueClient::new().await?;
//!
//!     let urls = client.fetch_queue().await?;
//!     println!("Fetched {} raw URL(s)", urls.len());
//!
//!     for url in &urls {
//!         if let Some(id) = extract_video_id(url) {
//!             println!("{} -> {}", url, id);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration Extension
//!
//! When the `wqconfig` feature is enabled, the document URL and request
//! timeout live in the application configuration:
//!
//! ```no_run
//! use wqconfig::get_config;
//! use wqsource::GistConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! if !config.get_gist_enabled()? {
//!     println!("Remote queue source is disabled");
//!     return Ok(());
//! }
//!
//! println!("Queue document: {}", config.get_gist_queue_url()?);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod extract;
mod models;

#[cfg(feature = "wqconfig")]
mod config_ext;

pub use client::{
    ClientBuilder, GistQueueClient, DEFAULT_QUEUE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
pub use error::{Error, Result};
pub use extract::extract_video_id;
pub use models::QueueDocument;

#[cfg(feature = "wqconfig")]
pub use config_ext::GistConfigExt;
