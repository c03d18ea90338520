use crate::client::Scraper;
use crate::model::{
    AppDetails, AppError, CatalogEntry, ListingRow, NOT_AVAILABLE, OwnedGame, ScrapeRequest,
    ScrapeSummary,
};
use crate::normalizer::MatchTracker;
use crate::parser::StoreParser;
use crate::storage::CsvReport;
use crate::utils::{parse_review_fraction, save_debug_html};
use std::io::Write;
use tracing::{debug, info, warn};

/// Walks the store listing page by page, enriches each title from its detail
/// page and writes one report row per fully detailed game. Stops as soon as
/// every owned game has been matched.
pub struct CatalogScraper<'a, S: Scraper> {
    scraper: &'a S,
    parser: &'a StoreParser,
    tracker: MatchTracker<'a>,
    debug_dump_dir: &'a str,
}

impl<'a, S: Scraper> CatalogScraper<'a, S> {
    pub fn new(
        scraper: &'a S,
        parser: &'a StoreParser,
        owned: &'a [OwnedGame],
        debug_dump_dir: &'a str,
    ) -> Self {
        Self {
            scraper,
            parser,
            tracker: MatchTracker::new(owned),
            debug_dump_dir,
        }
    }

    pub async fn run<W: Write>(
        &mut self,
        report: &mut CsvReport<W>,
    ) -> Result<ScrapeSummary, AppError> {
        let mut summary = ScrapeSummary::default();

        if self.tracker.is_complete() {
            info!("Nothing left to match, skipping the store listing");
            summary.complete = true;
            return Ok(summary);
        }

        let first = self
            .scraper
            .fetch(&ScrapeRequest::ListingPage { page: None })
            .await?;
        let total_pages = self.parser.parse_total_pages(&first);
        info!("Scraping data... ({} listing pages)", total_pages);

        'pages: for page in 1..=total_pages {
            let html = self
                .scraper
                .fetch(&ScrapeRequest::ListingPage { page: Some(page) })
                .await?;
            summary.pages_visited += 1;

            let rows = self.parser.parse_listing(&html);
            if rows.is_empty() {
                warn!("Listing page {} has no games", page);
                let label = format!("listing page {}", page);
                save_debug_html(self.debug_dump_dir, &label, &html);
            }
            debug!("Page {}/{}: {} games", page, total_pages, rows.len());

            for row in rows {
                summary.listings_seen += 1;

                match self.process_row(row).await {
                    Some(entry) => {
                        report.write_entry(&entry)?;
                        summary.rows_written += 1;
                    }
                    None => summary.rows_skipped += 1,
                }

                if self.tracker.is_complete() {
                    info!("All {} owned games matched", self.tracker.total());
                    summary.complete = true;
                    break 'pages;
                }
            }
        }

        summary.matched = self.tracker.matched();
        Ok(summary)
    }

    async fn process_row(&mut self, row: ListingRow) -> Option<CatalogEntry> {
        let hours_on_record = match self.tracker.credit(&row.name) {
            Some(owned) => {
                debug!(
                    "Matched owned game {} ({} h)",
                    owned.name, owned.hours_on_record
                );
                owned.hours_on_record.clone()
            }
            None => "0".to_string(),
        };

        let Some(app_id) = row.app_id.clone() else {
            debug!("No app id for {}, skipping", row.name);
            return None;
        };

        let details = self.fetch_details(&app_id).await?;

        Some(CatalogEntry {
            review_fraction: parse_review_fraction(row.review_tooltip.as_deref()),
            published_date: row
                .published_date
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            price: row.price,
            name: row.name,
            hours_on_record,
            app_id,
            genres: details.genres.join(","),
            developer: details.developer,
        })
    }

    async fn fetch_details(&self, app_id: &str) -> Option<AppDetails> {
        let request = ScrapeRequest::AppDetails {
            app_id: app_id.to_string(),
        };
        let html = match self.scraper.fetch(&request).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Detail page for app {} failed: {}", app_id, e);
                return None;
            }
        };

        let details = self.parser.parse_app_details(&html);
        match &details {
            Some(d) => debug!(
                "Scraping game data with id {}: {} / {}",
                app_id,
                d.genres.join(","),
                d.developer
            ),
            None => debug!("App {} has no genre/developer section", app_id),
        }
        details
    }
}
