//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for the summary view and the category chart.

use crate::reports::{CategoryTotals, ExpenseSummary};

/// Format a summary the way the menu prints it
///
/// One line per category in first-appearance order, then the grand total.
pub fn format_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    if summary.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::from("Expense Summary:\n");
    for category in &summary.categories {
        output.push_str(&format!(
            "- {}: {}\n",
            category.category,
            category.total.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "Total Spending: {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output
}

/// Render category totals as a text pie-share chart
///
/// Each row shows the category, a bar proportional to its share of the
/// total, the share as a percentage and the amount.
pub fn format_category_chart(totals: &CategoryTotals, symbol: &str, width: usize) -> String {
    if totals.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let total = totals.total().to_f64();
    let label_width = totals
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(20);

    let mut output = String::new();
    output.push_str(&format_header("Expense Distribution by Category", label_width + width + 24));
    output.push('\n');
    output.push_str(&separator(label_width + width + 24));
    output.push('\n');

    for (label, size) in totals.iter() {
        let value = size.to_f64();
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        output.push_str(&format!(
            "{:<label_width$} {} {:>6} {}\n",
            truncate(label, label_width),
            format_bar(value, total, width),
            format_percentage(share),
            size.format_with_symbol(symbol),
            label_width = label_width,
        ));
    }

    output
}

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
