use colored::Colorize;

use crate::config::Config;
use crate::features::analytics::{
    render_summary_box, render_summary_chart, NO_LOG_MESSAGE, NO_SESSIONS_MESSAGE,
};
use crate::features::focus::{format_duration, SessionKind, SessionRecord, Summary};

const CHART_WIDTH: usize = 30;

/// Format session totals as a bar chart with a totals box.
///
/// `log_exists` distinguishes a missing log from an empty one.
pub fn format_summary_pretty(summary: &Summary, log_exists: bool) -> String {
    if !log_exists {
        return format!("{}", NO_LOG_MESSAGE.yellow());
    }

    let Some(chart) = render_summary_chart(summary, CHART_WIDTH) else {
        return format!("{}", NO_SESSIONS_MESSAGE.yellow());
    };

    let mut output = Vec::new();
    output.push("Productivity Timer Analytics".bold().to_string());
    output.push("─".repeat(40));
    output.push(chart);
    output.push(String::new());
    output.push(render_summary_box(
        "Total Time",
        &[
            ("Work", format_minutes(summary.work_minutes)),
            ("Break", format_minutes(summary.break_minutes)),
            ("Sessions", summary.sessions.to_string()),
        ],
    ));

    if summary.skipped_lines > 0 {
        output.push(String::new());
        output.push(
            format!("Skipped {} unreadable log line(s)", summary.skipped_lines)
                .dimmed()
                .to_string(),
        );
    }

    output.join("\n")
}

/// Format recent sessions, newest first.
pub fn format_history_pretty(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return format!("Recent sessions (0)\n  {NO_SESSIONS_MESSAGE}");
    }

    let mut output = format!("Recent sessions ({})\n", records.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for record in records {
        let kind = match record.kind {
            SessionKind::Work => format!("{:<5}", record.kind).red(),
            SessionKind::Break => format!("{:<5}", record.kind).green(),
        };
        output.push_str(&format!(
            "{}  {}  {}\n",
            record.started_at_string().dimmed(),
            kind,
            format_minutes(record.duration_minutes)
        ));
    }

    output
}

/// Format the effective configuration.
pub fn format_config_pretty(config: &Config, log_path: &std::path::Path) -> String {
    let work = chrono::Duration::minutes(i64::from(config.timer.work_minutes));
    let brk = chrono::Duration::minutes(i64::from(config.timer.break_minutes));

    [
        format!("{}      {}", "Work:".bold(), format_duration(work)),
        format!("{}     {}", "Break:".bold(), format_duration(brk)),
        format!(
            "{}    {:?}",
            "Output:".bold(),
            config.general.default_output
        ),
        format!("{}  {}", "Log file:".bold(), log_path.display()),
    ]
    .join("\n")
}

fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.1} min")
}
