// src/pipeline/monitor.rs

//! Monitoring pass: fetch → extract every target, report, maybe notify.

use chrono::Local;

use crate::error::Result;
use crate::models::{Config, ItemCheck, ItemFailure, Report};
use crate::services::{FieldExtractor, Notifier, PageFetcher, build_report};

/// What a single pass produced.
#[derive(Debug)]
pub struct RunSummary {
    /// One entry per configured target, in config order
    pub checks: Vec<ItemCheck>,
    pub report: Report,
    /// Whether the report was handed to the notifier
    pub notified: bool,
}

impl RunSummary {
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_failed()).count()
    }
}

/// Email subject for a report.
pub fn subject(report_title: &str, has_issues: bool) -> String {
    if has_issues {
        format!("{report_title} - Issues Found")
    } else {
        format!("{report_title} Report")
    }
}

/// Check every target in order.
///
/// Per-item failures become [`ItemCheck::Failed`]; nothing here aborts the
/// batch. Sleeps the configured delay between targets.
pub fn check_targets(config: &Config, fetcher: &impl PageFetcher) -> Vec<ItemCheck> {
    let extractor = FieldExtractor::new(&config.selectors);
    let delay = config.monitor.request_delay();
    let total = config.targets.len();
    let mut checks = Vec::with_capacity(total);

    for (index, url) in config.targets.iter().enumerate() {
        log::info!("[{}/{}] Checking {}", index + 1, total, url);

        let check = match fetcher.fetch(url) {
            Ok(html) => extractor.extract(&html, url),
            Err(error) => {
                log::warn!("Failed to fetch {url}: {error}");
                ItemCheck::Failed(ItemFailure::from_error(url, &error))
            }
        };
        checks.push(check);

        if index + 1 < total && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    checks
}

/// Run one monitoring pass.
///
/// Only a notification failure is returned as an error.
pub fn run_monitor(
    config: &Config,
    fetcher: &impl PageFetcher,
    notifier: &impl Notifier,
) -> Result<RunSummary> {
    log::info!("Monitoring {} target(s)", config.targets.len());

    let checks = check_targets(config, fetcher);

    let title = &config.monitor.report_title;
    let heading = format!(
        "{title} Report - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let report = build_report(&checks, config.min_score).with_heading(&heading);

    for issue in &report.issues {
        log::warn!("Issue: {issue}");
    }

    let notified = report.has_issues() || config.send_daily_report;
    if notified {
        let subject = subject(title, report.has_issues());
        notifier.send(&subject, &report.body, &config.recipients)?;
    } else {
        log::info!("No issues found and daily report disabled; not sending");
    }

    Ok(RunSummary {
        checks,
        report,
        notified,
    })
}
