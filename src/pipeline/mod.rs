// Two sequential stages: profile feed, then the store catalog join.

pub mod catalog;
pub mod profile;

pub use catalog::CatalogScraper;
pub use profile::fetch_profile;

use crate::client::{Scraper, ScraperImpl};
use crate::config::{AppConfig, load_config_or_default};
use crate::model::{AppError, ScrapeSummary};
use crate::parser::{ProfileParser, StoreParser};
use crate::storage::CsvReport;
use tracing::info;

/// Runs both stages and writes the report to `config.output_path`.
/// A failed profile fetch aborts before the output file is created.
pub async fn run_report<S: Scraper>(
    scraper: &S,
    config: &AppConfig,
) -> Result<ScrapeSummary, AppError> {
    let profile_parser = ProfileParser::new();
    let store_parser = StoreParser::new()?;

    let library = fetch_profile(
        scraper,
        &profile_parser,
        &config.profile_id,
        &config.debug_dump_dir,
    )
    .await?;

    let mut report = CsvReport::create(&config.output_path)?;
    let summary = CatalogScraper::new(
        scraper,
        &store_parser,
        &library.games,
        &config.debug_dump_dir,
    )
    .run(&mut report)
    .await?;
    let rows = report.rows();
    report.into_inner()?;

    info!(
        "Wrote {} rows to {} ({} skipped, {}/{} owned games matched)",
        rows,
        config.output_path,
        summary.rows_skipped,
        summary.matched,
        library.games.len()
    );
    Ok(summary)
}

/// Loads the config at `path` (defaults when absent), builds the HTTP client
/// and runs the report.
pub async fn run_from_config(path: &str) -> Result<ScrapeSummary, AppError> {
    let config = load_config_or_default(path)?;
    let scraper = ScraperImpl::new(&config)?;
    run_report(&scraper, &config).await
}
