// src/services/extractor.rs

//! Field extractor service.
//!
//! Pulls title, stock status, secondary-format availability and review score
//! out of a product page using the configured CSS selectors.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ItemCheck, ItemFailure, ItemStatus, ProductSelectors, UNKNOWN_TITLE};

/// Service for turning raw product-page markup into an [`ItemCheck`].
pub struct FieldExtractor<'a> {
    selectors: &'a ProductSelectors,
}

impl<'a> FieldExtractor<'a> {
    /// Create a new extractor over the given selectors.
    pub fn new(selectors: &'a ProductSelectors) -> Self {
        Self { selectors }
    }

    /// Extract the status of one page.
    ///
    /// Missing elements fall back to defaults. A lookup that cannot run at
    /// all turns the whole page into a failed check.
    pub fn extract(&self, html: &str, url: &str) -> ItemCheck {
        match self.try_extract(html, url) {
            Ok(status) => ItemCheck::Checked(status),
            Err(error) => {
                log::warn!("Failed to extract fields from {url}: {error}");
                ItemCheck::Failed(ItemFailure::from_error(url, &error))
            }
        }
    }

    fn try_extract(&self, html: &str, url: &str) -> Result<ItemStatus> {
        let title_sel = Self::parse_selector(&self.selectors.title_selector)?;
        let availability_sel = Self::parse_selector(&self.selectors.availability_selector)?;
        let secondary_sel = Self::parse_selector(&self.selectors.secondary_format_selector)?;
        let rating_sel = Self::parse_selector(&self.selectors.rating_selector)?;

        let document = Html::parse_document(html);

        let title = Self::first_text(&document, &title_sel)
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let in_stock = Self::first_text(&document, &availability_sel)
            .is_some_and(|text| text.contains(&self.selectors.in_stock_text));

        let secondary_format_available = document.select(&secondary_sel).next().is_some();

        let review_score = Self::first_text(&document, &rating_sel)
            .map_or(0.0, |text| parse_review_score(&text));

        log::debug!(
            "{url}: title={title:?} in_stock={in_stock} secondary={secondary_format_available} score={review_score}"
        );

        Ok(ItemStatus {
            title,
            in_stock,
            secondary_format_available,
            review_score,
            url: url.to_string(),
        })
    }

    fn first_text(document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

/// Parse the leading token of a rating text ("4.5 out of 5 stars").
///
/// Returns 0.0 when the token is not a finite number.
pub fn parse_review_score(text: &str) -> f64 {
    text.trim()
        .split(' ')
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|score| score.is_finite())
        .unwrap_or(0.0)
}
