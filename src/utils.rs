// Utility functions
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, warn};

static TWO_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})").expect("Invalid regex"));

/// Turns a review tooltip ("92% of the 10,000 user reviews ...") into a
/// fraction using the first two-digit number found.
pub fn parse_review_fraction(tooltip: Option<&str>) -> Option<f64> {
    let caps = TWO_DIGITS_RE.captures(tooltip?)?;
    let percent: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(percent / 100.0)
}

/// Saves a fetched document for later inspection. Never fails the caller.
pub fn save_debug_html(dir: &str, label: &str, body: &str) {
    let folder = Path::new(dir);
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {}", e);
        return;
    }
    let filename = folder.join(format!("debug-{}.html", label.replace(' ', "_")));
    if let Err(e) = fs::write(&filename, body) {
        warn!("Failed to write debug HTML: {}", e);
    } else {
        info!("Saved debug HTML: {}", filename.display());
    }
}
