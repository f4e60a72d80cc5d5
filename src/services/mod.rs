//! Service layer for the monitor.
//!
//! This module contains the business logic for:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - Field extraction (`FieldExtractor`)
//! - Report building (`build_report`)
//! - Email delivery (`Notifier`, `SmtpNotifier`)

mod extractor;
mod fetcher;
mod notifier;
mod report;

pub use extractor::{FieldExtractor, parse_review_score};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use notifier::{Notifier, SmtpNotifier};
pub use report::build_report;
