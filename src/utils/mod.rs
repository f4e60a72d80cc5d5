//! Utility functions and helpers.

pub mod http;

/// Render a boolean as "Yes" or "No".
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Render a score with at least one decimal place ("4.0", "4.5").
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}
