//! Text rendering for trips.
//!
//! Framework-agnostic helpers that turn trip summaries and budgets into the
//! plain strings printed by the command-line binary.

use crate::itinerary::{Budget, TripSummary, Visibility};

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`
///
/// # Arguments
/// * `progress_percent` - Progress percentage (0-100)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // clamped_progress is in [0, 100] and length is small, so the product fits in usize
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// Formats an amount as dollars, keeping the sign for negative amounts.
///
/// Returns strings like "$1,300.00" or "-$50.00".
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Budget block: spent/total bar, remainder, and the category breakdown.
#[must_use]
pub fn format_budget(budget: &Budget) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} / {}",
        format_currency(budget.spent),
        format_currency(budget.total)
    ));
    if let Some(percent) = budget.spent_percent() {
        lines.push(format_progress_bar(percent, None));
    }
    lines.push(format!("{} remaining", format_currency(budget.remaining())));
    for (category, amount) in budget.breakdown() {
        lines.push(format!("  {}: {}", category.label(), format_currency(amount)));
    }
    lines.join("\n")
}

/// One-line summary for a trip list.
///
/// e.g. `European Adventure | 2024-06-15 → 2024-07-06 (22 days) | Upcoming | Paris, Rome`
#[must_use]
pub fn format_trip_summary(summary: &TripSummary) -> String {
    let destinations = if summary.destinations.is_empty() {
        "no destinations yet".to_string()
    } else {
        summary.destinations.join(", ")
    };
    let shared = match summary.visibility {
        Visibility::Public => " | public",
        Visibility::Private => "",
    };

    format!(
        "{} | {} → {} ({} days) | {} | {}{}",
        summary.name,
        summary.dates.start(),
        summary.dates.end(),
        summary.duration_days,
        summary.status.label(),
        destinations,
        shared
    )
}
