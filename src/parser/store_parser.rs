// Store search listing and app detail page parsing
use crate::model::{AppDetails, ListingRow, ParserError};
use scraper::{ElementRef, Html, Selector};

pub struct StoreParser {
    pagination: Selector,
    game_block: Selector,
    title: Selector,
    released: Selector,
    final_price: Selector,
    review_summary: Selector,
    genres_section: Selector,
    genre_span: Selector,
    link: Selector,
    developer: Selector,
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::HtmlParseError(e.to_string()))
}

fn text_of(element: ElementRef<'_>) -> Option<String> {
    raw_text_of(element).map(|t| t.trim().to_string())
}

/// Untrimmed text, used for titles so name matching stays whitespace-sensitive.
fn raw_text_of(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    (!text.trim().is_empty()).then_some(text)
}

impl StoreParser {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            pagination: selector("div.search_pagination_right a")?,
            game_block: selector("div.responsive_search_name_combined")?,
            title: selector("span.title")?,
            released: selector("div.search_released")?,
            final_price: selector("div.discount_final_price")?,
            review_summary: selector("span.search_review_summary")?,
            genres_section: selector("div#genresAndManufacturer")?,
            genre_span: selector("span")?,
            link: selector("a")?,
            developer: selector("div.dev_row a")?,
        })
    }

    fn first_text(&self, element: ElementRef<'_>, selector: &Selector) -> Option<String> {
        element.select(selector).next().and_then(text_of)
    }

    /// Highest numbered pagination link; arrows like ">" are ignored.
    pub fn parse_total_pages(&self, html: &str) -> usize {
        let document = Html::parse_document(html);
        document
            .select(&self.pagination)
            .filter_map(text_of)
            .filter_map(|t| t.parse::<usize>().ok())
            .max()
            .unwrap_or(1)
            .max(1)
    }

    pub fn parse_listing(&self, html: &str) -> Vec<ListingRow> {
        let document = Html::parse_document(html);
        let mut rows = Vec::new();

        for block in document.select(&self.game_block) {
            let Some(name) = block.select(&self.title).next().and_then(raw_text_of) else {
                continue;
            };

            let app_id = block
                .parent()
                .and_then(ElementRef::wrap)
                .and_then(|parent| parent.value().attr("data-ds-appid"))
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty());

            rows.push(ListingRow {
                name,
                published_date: self.first_text(block, &self.released),
                price: self.first_text(block, &self.final_price),
                review_tooltip: block
                    .select(&self.review_summary)
                    .next()
                    .and_then(|e| e.value().attr("data-tooltip-html"))
                    .map(str::to_string),
                app_id,
            });
        }

        rows
    }

    /// `None` unless the page has a genre/manufacturer section with at least
    /// one genre link and a developer link.
    pub fn parse_app_details(&self, html: &str) -> Option<AppDetails> {
        let document = Html::parse_document(html);
        let section = document.select(&self.genres_section).next()?;
        let genre_span = section.select(&self.genre_span).next()?;

        let genres: Vec<String> = genre_span.select(&self.link).filter_map(text_of).collect();
        if genres.is_empty() {
            return None;
        }

        let developer = self.first_text(section, &self.developer)?;

        Some(AppDetails { genres, developer })
    }
}
