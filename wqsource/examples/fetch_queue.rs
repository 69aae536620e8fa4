//! Example: Fetch the remote queue document and extract video ids
//!
//! This example demonstrates:
//! - Creating a gist queue client
//! - Fetching the raw URL list
//! - Running each URL through the identifier extractor
//!
//! Run with: cargo run --example fetch_queue

use wqsource::{extract_video_id, GistQueueClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("WatchQueue - Remote Queue Fetch");
    println!("===============================\n");

    let client = GistQueueClient::new().await?;
    println!("Document URL: {}\n", client.document_url());

    let urls = client.fetch_queue().await?;
    println!("Fetched {} raw URL(s)\n", urls.len());

    let mut kept = 0;
    for url in &urls {
        match extract_video_id(url) {
            Some(id) => {
                kept += 1;
                println!("  {:<15} {}", id, url);
            }
            None => println!("  {:<15} {}", "(skipped)", url),
        }
    }

    println!("\n{} of {} URL(s) carry a usable video id", kept, urls.len());

    Ok(())
}
