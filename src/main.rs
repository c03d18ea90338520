mod client;
mod config;
mod model;
mod normalizer;
mod parser;
mod pipeline;
mod storage;
mod utils;

use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let started = Instant::now();
    match pipeline::run_from_config(CONFIG_PATH).await {
        Ok(summary) => {
            info!(
                "Done in {:.1}s: {} pages, {} listings, {} rows written",
                started.elapsed().as_secs_f64(),
                summary.pages_visited,
                summary.listings_seen,
                summary.rows_written
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
