// src/models/selectors.rs

//! CSS selectors for scraping a product page.

use serde::Deserialize;

/// CSS selectors and marker text used by the field extractor.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductSelectors {
    /// Selector for the product title element
    #[serde(default = "defaults::title")]
    pub title_selector: String,

    /// Selector for the availability element
    #[serde(default = "defaults::availability")]
    pub availability_selector: String,

    /// Substring of the availability text that means "in stock"
    #[serde(default = "defaults::in_stock_text")]
    pub in_stock_text: String,

    /// Selector for the secondary-format purchase control.
    /// Only its presence is checked.
    #[serde(default = "defaults::secondary_format")]
    pub secondary_format_selector: String,

    /// Selector for the rating element, e.g. "4.5 out of 5 stars"
    #[serde(default = "defaults::rating")]
    pub rating_selector: String,
}

impl Default for ProductSelectors {
    fn default() -> Self {
        Self {
            title_selector: defaults::title(),
            availability_selector: defaults::availability(),
            in_stock_text: defaults::in_stock_text(),
            secondary_format_selector: defaults::secondary_format(),
            rating_selector: defaults::rating(),
        }
    }
}

mod defaults {
    pub fn title() -> String {
        "span#productTitle".into()
    }
    pub fn availability() -> String {
        "div#availability".into()
    }
    pub fn in_stock_text() -> String {
        "In Stock".into()
    }
    pub fn secondary_format() -> String {
        "a#kindle-button".into()
    }
    pub fn rating() -> String {
        "span.a-icon-alt".into()
    }
}
