//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::features::focus::{SessionKind, SessionSink, Summary};
use crate::tui::app::{App, DurationForm, FormField, Modal, ModalLevel};
use crate::tui::event::HELP;

const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Red,
        SessionKind::Break => Color::Green,
    }
}

/// Render the application UI.
pub fn render<S: SessionSink>(frame: &mut Frame<'_>, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if let Some(summary) = &app.chart {
        render_chart(frame, summary);
    }
    if let Some(form) = &app.form {
        render_form(frame, form);
    }
    if let Some(modal) = app.modal() {
        render_modal(frame, modal);
    }
}

fn render_header<S: SessionSink>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let timer = app.timer();
    let kind = timer.current_kind();
    let state = if timer.is_running() { "running" } else { "idle" };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Productivity Timer ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{kind} session"),
            Style::default().fg(kind_color(kind)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({state})"), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_countdown<S: SessionSink>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let timer = app.timer();
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::raw(""); usize::from(inner_height / 2)];
    lines.push(Line::styled(
        timer.format_remaining(),
        Style::default()
            .fg(kind_color(timer.current_kind()))
            .add_modifier(Modifier::BOLD),
    ));

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

fn render_progress<S: SessionSink>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let timer = app.timer();
    let config = timer.config();
    let label = format!(
        "{} min work / {} min break",
        config.work_minutes(),
        config.break_minutes()
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(timer.current_kind())))
        .ratio(timer.progress())
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_status_bar<S: SessionSink>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_chart(frame: &mut Frame<'_>, summary: &Summary) {
    let area = popup_area(frame.area(), 60, 16);
    let data: Vec<(&str, u64)> = summary
        .totals()
        .iter()
        .map(|(kind, minutes)| (kind.as_str(), minutes.max(0.0).round() as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Total Time (minutes) ")
                .title_bottom(" Enter/Esc to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(4)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::Black).bg(Color::Blue));

    frame.render_widget(Clear, area);
    frame.render_widget(chart, area);
}

fn render_form(frame: &mut Frame<'_>, form: &DurationForm) {
    let area = popup_area(frame.area(), 50, 8);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::raw(format!("{label:<26}")),
            Span::styled(format!("{value}{cursor}"), style),
        ])
    };

    let lines = vec![
        field("Work Duration (minutes):", &form.work, form.focus == FormField::Work),
        field("Break Duration (minutes):", &form.brk, form.focus == FormField::Break),
        Line::raw(""),
        Line::styled(
            "Tab: switch field | Enter: set durations | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Change Durations ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn render_modal(frame: &mut Frame<'_>, modal: &Modal) {
    let area = popup_area(frame.area(), 60, 7);
    let color = match modal.level {
        ModalLevel::Info => Color::Cyan,
        ModalLevel::Error => Color::Red,
    };

    let dialog = Paragraph::new(vec![
        Line::raw(modal.message.clone()),
        Line::raw(""),
        Line::styled("Press Enter to continue", Style::default().fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", modal.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// A box of the given width percentage and height centered in `area`.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{SessionConfig, SessionLog};
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn test_app(dir: &TempDir) -> App {
        App::new(
            SessionConfig::from_minutes(25, 5).unwrap(),
            SessionLog::new(dir.path().join("sessions.csv")),
        )
    }

    #[test]
    fn test_renders_countdown() {
        let dir = TempDir::new().unwrap();
        let screen = draw(&test_app(&dir));

        assert!(screen.contains("25:00"));
        assert!(screen.contains("Work session"));
        assert!(screen.contains("25 min work / 5 min break"));
    }

    #[test]
    fn test_renders_form() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.open_duration_form();

        let screen = draw(&app);
        assert!(screen.contains("Change Durations"));
        assert!(screen.contains("Break Duration (minutes):"));
    }

    #[test]
    fn test_renders_chart() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.chart = Some(Summary {
            work_minutes: 50.0,
            break_minutes: 10.0,
            sessions: 3,
            skipped_lines: 0,
        });

        let screen = draw(&app);
        assert!(screen.contains("Total Time (minutes)"));
        assert!(screen.contains("Work"));
        assert!(screen.contains("Break"));
    }

    #[test]
    fn test_renders_modal() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.show_analytics();

        let screen = draw(&app);
        assert!(screen.contains("No Data"));
    }
}
