// src/services/report.rs

//! Report builder.
//!
//! Renders one text block per checked target and collects the issues that
//! decide whether a notification goes out.

use std::fmt::Write;

use crate::models::{ItemCheck, Report};
use crate::utils::{format_score, yes_no};

/// Build the report for a run. Pure: same inputs, same report.
pub fn build_report(checks: &[ItemCheck], min_score: f64) -> Report {
    let mut report = Report::default();

    for check in checks {
        let _ = writeln!(report.body, "Book: {}", check.title());
        let _ = writeln!(report.body, "URL: {}", check.url());

        match check {
            ItemCheck::Failed(failure) => {
                let _ = writeln!(report.body, "Error: {}", failure.message);
                report.issues.push(format!("Error checking {}", failure.title));
            }
            ItemCheck::Checked(status) => {
                let _ = writeln!(report.body, "In Stock: {}", yes_no(status.in_stock));
                let _ = writeln!(
                    report.body,
                    "Secondary Format Available: {}",
                    yes_no(status.secondary_format_available)
                );
                let _ = writeln!(report.body, "Review Score: {}", format_score(status.review_score));

                if !status.in_stock {
                    report.issues.push(format!("{} is out of stock", status.title));
                }
                if !status.secondary_format_available {
                    report
                        .issues
                        .push(format!("{} secondary format unavailable", status.title));
                }
                if status.review_score < min_score {
                    report.issues.push(format!(
                        "{} review score below threshold ({})",
                        status.title,
                        format_score(status.review_score)
                    ));
                }
            }
        }

        report.body.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemFailure, ItemStatus};

    fn status(title: &str, in_stock: bool, secondary: bool, score: f64) -> ItemCheck {
        ItemCheck::Checked(ItemStatus {
            title: title.to_string(),
            in_stock,
            secondary_format_available: secondary,
            review_score: score,
            url: format!("https://example.com/{title}"),
        })
    }

    #[test]
    fn healthy_items_produce_no_issues() {
        let checks = vec![status("Alpha", true, true, 4.5), status("Beta", true, true, 4.0)];
        let report = build_report(&checks, 4.0);

        assert!(report.issues.is_empty());
        assert!(!report.has_issues());
        assert!(report.body.contains("Book: Alpha"));
        assert!(report.body.contains("Book: Beta"));
        assert_eq!(report.body.matches("In Stock: Yes").count(), 2);
        assert!(report.body.contains("Review Score: 4.0"));
    }

    #[test]
    fn renders_full_block() {
        let report = build_report(&[status("Alpha", false, true, 3.5)], 4.0);
        assert_eq!(
            report.body,
            "Book: Alpha\n\
             URL: https://example.com/Alpha\n\
             In Stock: No\n\
             Secondary Format Available: Yes\n\
             Review Score: 3.5\n\n"
        );
    }

    #[test]
    fn issues_follow_item_order() {
        let checks = vec![status("Alpha", false, false, 2.5), status("Beta", true, true, 1.0)];
        let report = build_report(&checks, 4.0);

        assert_eq!(
            report.issues,
            vec![
                "Alpha is out of stock",
                "Alpha secondary format unavailable",
                "Alpha review score below threshold (2.5)",
                "Beta review score below threshold (1.0)",
            ]
        );
    }

    #[test]
    fn out_of_stock_issue_exactly_once() {
        let report = build_report(&[status("Alpha", false, true, 5.0)], 4.0);
        assert_eq!(report.issues, vec!["Alpha is out of stock"]);

        let report = build_report(&[status("Alpha", true, true, 5.0)], 4.0);
        assert!(report.issues.iter().all(|i| !i.contains("out of stock")));
    }

    #[test]
    fn score_equal_to_threshold_is_not_flagged() {
        let report = build_report(&[status("Alpha", true, true, 4.0)], 4.0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn failed_item_contributes_only_error_issue() {
        let checks = vec![ItemCheck::Failed(ItemFailure::new(
            "https://example.com/x",
            "operation timed out",
        ))];
        let report = build_report(&checks, 4.0);

        assert_eq!(report.issues, vec!["Error checking Error checking book"]);
        assert!(report.body.contains("Book: Error checking book\n"));
        assert!(report.body.contains("Error: operation timed out\n"));
        assert!(!report.body.contains("In Stock"));
        assert!(!report.body.contains("Review Score"));
    }

    #[test]
    fn heading_is_prepended() {
        let report = build_report(&[status("Alpha", true, true, 5.0)], 4.0)
            .with_heading("Book Status Report - 2024-01-01 00:00:00");
        assert!(
            report
                .body
                .starts_with("Book Status Report - 2024-01-01 00:00:00\n\nBook: Alpha\n")
        );
    }
}
