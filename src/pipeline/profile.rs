use crate::client::Scraper;
use crate::model::{AppError, ProfileLibrary, ScrapeRequest, ScraperError};
use crate::parser::ProfileParser;
use crate::utils::save_debug_html;
use tracing::{debug, error, info};

/// Downloads and parses the owned-games feed for `profile_id`.
/// A non-success status is logged with its code and returned as an error.
pub async fn fetch_profile<S: Scraper>(
    scraper: &S,
    parser: &ProfileParser,
    profile_id: &str,
    debug_dump_dir: &str,
) -> Result<ProfileLibrary, AppError> {
    info!("Fetching game list for profile {}...", profile_id);
    let request = ScrapeRequest::Profile {
        profile_id: profile_id.to_string(),
    };

    let xml = match scraper.fetch(&request).await {
        Ok(xml) => xml,
        Err(ScraperError::InvalidResponse(status)) => {
            error!("Failed to retrieve data. HTTP Status code: {}", status);
            return Err(ScraperError::InvalidResponse(status).into());
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Profile feed: {} bytes", xml.len());

    let library = parser.parse(&xml).inspect_err(|e| {
        error!("Profile feed could not be parsed: {}", e);
        save_debug_html(debug_dump_dir, &format!("profile-{}", profile_id), &xml);
    })?;

    info!(
        "Profile {} owns {} games",
        library.steam_id.as_deref().unwrap_or(profile_id),
        library.games.len()
    );
    Ok(library)
}
