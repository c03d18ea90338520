// Core structs: OwnedGame, ListingRow, CatalogEntry and the error types
use thiserror::Error;

/// Sentinel written for any field the source documents did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedGame {
    pub name: String,
    pub app_id: String,
    pub hours_on_record: String,
}

/// A parsed profile feed: the canonical profile name plus the owned games,
/// sorted by name.
#[derive(Debug, Clone)]
pub struct ProfileLibrary {
    pub steam_id: Option<String>,
    pub games: Vec<OwnedGame>,
}

/// One game block on a storefront listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub name: String,
    pub published_date: Option<String>,
    pub price: Option<String>,
    pub review_tooltip: Option<String>,
    pub app_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDetails {
    pub genres: Vec<String>,
    pub developer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub published_date: String,
    pub price: Option<String>,
    pub review_fraction: Option<f64>,
    pub hours_on_record: String,
    pub app_id: String,
    pub genres: String,
    pub developer: String,
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl CatalogEntry {
    pub fn to_record(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.published_date.clone(),
            or_not_available(self.price.clone()),
            or_not_available(self.review_fraction.map(|f| f.to_string())),
            self.hours_on_record.clone(),
            self.app_id.clone(),
            self.genres.clone(),
            self.developer.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrapeRequest {
    Profile { profile_id: String },
    /// `None` is the bare listing used for page-count discovery.
    ListingPage { page: Option<usize> },
    AppDetails { app_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages_visited: usize,
    pub listings_seen: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub matched: usize,
    pub complete: bool,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("Failed to retrieve data. HTTP Status code: {0}")]
    InvalidResponse(u16),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("XML parse error: {0}")]
    XmlParseError(String),
    #[error("HTML parse error: {0}")]
    HtmlParseError(String),
    #[error("profile feed error: {0}")]
    ProfileError(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scraper(#[from] ScraperError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
