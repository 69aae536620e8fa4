use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use wqconfig::get_config;
use wqengine::{QueueEngine, QueueEvent, QueueState};
use wqsource::GistConfigExt;
use wqstore::{SqliteQueueStore, StoreConfigExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Configuration ==========

    let config = get_config();

    let min_level = config
        .get_log_min_level()
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(min_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("📡 WatchQueue starting...");

    if !config.get_gist_enabled()? {
        warn!("⚠️ Remote queue source is disabled; only the local queue will be used");
    }

    // ========== PHASE 2 : Stockage et moteur ==========

    let db_path = config.queue_db_path();
    info!("💾 Queue store: {}", db_path.display());
    let store = Arc::new(SqliteQueueStore::new(&db_path)?);

    let engine = QueueEngine::from_config(store).await?;
    info!(
        "✅ Engine ready (document: {})",
        engine.client().document_url()
    );

    // Afficher chaque transition au fil de l'eau
    engine.register_callback(|event| match event {
        QueueEvent::Loading => println!("⏳ Loading queue..."),
        QueueEvent::Ready { queue, cursor } => {
            println!("▶️  Video {} of {}", cursor + 1, queue.len());
            if let Some(video) = queue.get(*cursor) {
                println!("   {}", video.url);
            }
        }
        QueueEvent::Empty => println!("📭 Queue is empty"),
        QueueEvent::Error { message } => println!("❌ {}", message),
    });

    // ========== PHASE 3 : Chargement initial ==========

    if let Err(e) = engine.load().await {
        warn!("⚠️ Initial load left the store out of sync: {}", e);
    }

    // ========== PHASE 4 : Boucle de commandes ==========

    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        let (command, argument) = match input.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "ended" => match engine.on_ended().await {
                Ok(Some(video)) => println!("🏁 Finished: {}", video.id),
                Ok(None) => {}
                Err(e) => warn!("⚠️ Failed to consume current video: {}", e),
            },
            "error" => {
                let diagnostic = if argument.is_empty() {
                    "playback error"
                } else {
                    argument
                };
                match engine.on_error(diagnostic).await {
                    Ok(Some(video)) => println!("🏁 Dropped: {}", video.id),
                    Ok(None) => {}
                    Err(e) => warn!("⚠️ Failed to drop current video: {}", e),
                }
            }
            "next" => engine.skip_next().await,
            "prev" => engine.skip_previous().await,
            "restart" => engine.restart().await,
            "reload" => {
                if let Err(e) = engine.load().await {
                    warn!("⚠️ Reload left the store out of sync: {}", e);
                }
            }
            "refresh" => {
                if let Err(e) = engine.refresh().await {
                    warn!("⚠️ Refresh failed: {}", e);
                }
            }
            "status" => print_status(&engine).await?,
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    info!("👋 WatchQueue stopped");
    Ok(())
}

/// Affiche l'état du moteur, la position et le dernier accès distant.
async fn print_status(engine: &QueueEngine) -> Result<(), Box<dyn std::error::Error>> {
    let state = engine.state().await;
    let (queue, cursor) = engine.snapshot().await;

    println!("State   : {}", state);
    if state == QueueState::Ready {
        println!("Position: {} / {}", cursor + 1, queue.len());
        if let Some(video) = queue.get(cursor) {
            println!("Current : {} ({})", video.id, video.url);
        }
    }

    let last_fetch = engine.last_fetch_time().await?;
    if last_fetch == 0 {
        println!("Fetched : never");
    } else {
        match chrono::DateTime::from_timestamp_millis(last_fetch as i64) {
            Some(when) => println!("Fetched : {}", when.format("%Y-%m-%d %H:%M:%S UTC")),
            None => println!("Fetched : {} ms since epoch", last_fetch),
        }
    }
    Ok(())
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  ended         current video finished playing");
    println!("  error [msg]   current video failed to play");
    println!("  next          move to the next video");
    println!("  prev          move to the previous video");
    println!("  restart       go back to the first video");
    println!("  reload        run the load sequence again");
    println!("  refresh       discard the local queue and refetch");
    println!("  status        show queue state and last fetch time");
    println!("  quit          exit");
    println!();
}
