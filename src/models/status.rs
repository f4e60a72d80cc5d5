//! Per-target inspection results.

use crate::error::AppError;

/// Title used when a target could not be inspected at all.
pub const ERROR_TITLE: &str = "Error checking book";

/// Title used when a page has no title element.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Signals extracted from one product page.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStatus {
    pub title: String,
    pub in_stock: bool,
    pub secondary_format_available: bool,
    pub review_score: f64,
    pub url: String,
}

/// A target whose fetch or extraction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub title: String,
    pub message: String,
    pub url: String,
}

impl ItemFailure {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
            url: url.into(),
        }
    }

    /// Downgrade a per-item error into report data.
    pub fn from_error(url: impl Into<String>, error: &AppError) -> Self {
        Self::new(url, error.to_string())
    }
}

/// Outcome of checking one target. Exactly one is produced per target.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemCheck {
    Checked(ItemStatus),
    Failed(ItemFailure),
}

impl ItemCheck {
    pub fn title(&self) -> &str {
        match self {
            Self::Checked(status) => &status.title,
            Self::Failed(failure) => &failure.title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Checked(status) => &status.url,
            Self::Failed(failure) => &failure.url,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<ItemStatus> for ItemCheck {
    fn from(status: ItemStatus) -> Self {
        Self::Checked(status)
    }
}

impl From<ItemFailure> for ItemCheck {
    fn from(failure: ItemFailure) -> Self {
        Self::Failed(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_uses_fixed_title_and_keeps_message() {
        let error = AppError::fetch("https://example.com/x", "connection reset by peer");
        let check = ItemCheck::from(ItemFailure::from_error("https://example.com/x", &error));

        assert!(check.is_failed());
        assert_eq!(check.title(), ERROR_TITLE);
        assert_eq!(check.url(), "https://example.com/x");
        match check {
            ItemCheck::Failed(failure) => assert_eq!(failure.message, "connection reset by peer"),
            ItemCheck::Checked(_) => panic!("expected failure"),
        }
    }
}
