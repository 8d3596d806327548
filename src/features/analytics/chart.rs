//! Terminal bar charts for session totals.

use crate::features::focus::Summary;

const FULL_BLOCK: char = '█';

/// Message shown when the log exists but has no time in it.
pub const NO_SESSIONS_MESSAGE: &str = "No sessions recorded yet.";

/// Message shown when there is no log file at all.
pub const NO_LOG_MESSAGE: &str = "Log file not found.";

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - (label, value) pairs
/// * `max_label_width` - Maximum width for labels
/// * `bar_width` - Width of the bar portion
///
/// # Returns
///
/// A multi-line string with the chart.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(data: &[(String, f64)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);
    let mut lines = Vec::new();

    for (label, value) in data {
        let label = if label.chars().count() > max_label_width {
            let keep: String = label.chars().take(max_label_width.saturating_sub(3)).collect();
            format!("{keep}...")
        } else {
            format!("{label:max_label_width$}")
        };

        let bar_length = ((value.max(0.0) / max_value) * bar_width as f64).round() as usize;
        let bar_length = bar_length.min(bar_width);
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{label} |{bar}{padding} {value:.1}"));
    }

    lines.join("\n")
}

/// Render a summary box with key metrics.
#[must_use]
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3;
    let box_width = content_width.max(title.len()) + 4;

    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - title.len()) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - title.len())
    ));
    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item_str = format!("{label:>max_label_len$} : {value}");
        let padding = box_width - item_str.chars().count();
        lines.push(format!("│ {}{} │", item_str, " ".repeat(padding - 2)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));
    lines.join("\n")
}

/// Render the analytics chart for a summary, one bar per session kind.
///
/// Returns `None` when there is nothing to chart.
#[must_use]
pub fn render_summary_chart(summary: &Summary, bar_width: usize) -> Option<String> {
    if summary.is_empty() {
        return None;
    }

    let data: Vec<(String, f64)> = summary
        .totals()
        .iter()
        .map(|(kind, minutes)| (kind.to_string(), *minutes))
        .collect();

    Some(render_bar_chart(&data, 5, bar_width))
}
