// HTTP access to the community profile feed and the store pages.

pub mod fetcher;
pub mod traits;

pub use fetcher::ScraperImpl;
pub use traits::Scraper;
