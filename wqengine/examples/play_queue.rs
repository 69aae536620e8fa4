//! Example: Drive the queue engine end to end
//!
//! This example demonstrates:
//! - Building an engine over an in-memory store and the default remote document
//! - Watching transitions through a registered callback
//! - Consuming and navigating the queue
//!
//! Run with: cargo run --example play_queue

use std::sync::Arc;

use wqengine::{QueueEngine, QueueEvent, QueueState};
use wqsource::GistQueueClient;
use wqstore::MemoryQueueStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("WatchQueue - Engine Walkthrough");
    println!("===============================\n");

    let store = Arc::new(MemoryQueueStore::new());
    let client = GistQueueClient::new().await?;
    let engine = QueueEngine::new(store, client);

    engine.register_callback(|event| match event {
        QueueEvent::Loading => println!("  -> loading"),
        QueueEvent::Ready { queue, cursor } => {
            println!("  -> ready: video {} of {}", cursor + 1, queue.len())
        }
        QueueEvent::Empty => println!("  -> empty"),
        QueueEvent::Error { message } => println!("  -> error: {}", message),
    });

    println!("Loading the queue...");
    let state = engine.load().await?;
    if state != QueueState::Ready {
        println!("\nNothing to play ({})", state);
        return Ok(());
    }

    let (queue, _) = engine.snapshot().await;
    println!("\nQueue:");
    for (i, video) in queue.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, video.id, video.url);
    }

    println!("\nSkipping to the next video...");
    engine.skip_next().await;

    println!("Finishing the current video...");
    if let Some(done) = engine.on_ended().await? {
        println!("Consumed {}", done.id);
    }

    println!(
        "\n{} video(s) left, position {}",
        engine.len().await,
        engine.position().await + 1
    );
    Ok(())
}
