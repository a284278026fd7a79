//! Dashboard rendering: sidebar, header, terminal pane
//!
//! Pure view code: reads `Session` and `UiState`, draws widgets, and
//! records the log viewport height for page scrolling. No session
//! mutation happens here.

use crate::core::config::ConsoleConfig;
use crate::core::types::LogKind;
use crate::session::Session;
use crate::ui::state::UiState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SIDEBAR_WIDTH: u16 = 28;

/// Style for a log entry kind (four fixed visual treatments)
fn kind_style(kind: LogKind) -> Style {
    match kind {
        LogKind::Info => Style::default().fg(Color::Gray),
        LogKind::Success => Style::default().fg(Color::Green),
        LogKind::Error => Style::default().fg(Color::Red),
        LogKind::Warning => Style::default().fg(Color::Yellow),
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Render one full frame of the dashboard
pub fn draw(frame: &mut Frame, session: &Session, ui: &mut UiState, config: &ConsoleConfig) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(frame.size());

    draw_sidebar(frame, cols[0], config);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(cols[1]);

    draw_header(frame, rows[0], config);
    draw_terminal(frame, rows[1], session, ui, config);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, config: &ConsoleConfig) {
    let good = Style::default().fg(Color::Green);
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("SYSTEM STATUS", dim().add_modifier(Modifier::BOLD))),
        status_line("Agent Status", "Online", good, label),
        status_line("Server Load", "12%", good, label),
        status_line("Security", "Verified", good, label),
        Line::from(""),
        Line::from(Span::styled("ACTIVE PROJECT", dim().add_modifier(Modifier::BOLD))),
        status_line("Branch", &config.branch, Style::default().fg(Color::White), label),
        Line::from(vec![
            Span::styled("  commit: ", dim()),
            Span::styled(config.commit.clone(), dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{25cf} ", good),
            Span::styled("Connected to", dim()),
        ]),
        Line::from(Span::styled("  Agent Network", dim())),
    ];

    let sidebar = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            " AutoDeploy ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    );
    frame.render_widget(sidebar, area);
}

fn status_line(label: &str, value: &str, value_style: Style, label_style: Style) -> Line<'static> {
    // Fixed-width label column keeps the values aligned.
    let padded = format!("  {label:<14}");
    Line::from(vec![
        Span::styled(padded, label_style),
        Span::styled(value.to_string(), value_style),
    ])
}

fn draw_header(frame: &mut Frame, area: Rect, config: &ConsoleConfig) {
    let line = Line::from(vec![
        Span::styled("Project / ", dim()),
        Span::styled(
            config.project_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Enter run \u{b7} F5 deploy \u{b7} PgUp/PgDn scroll \u{b7} Esc quit", dim()),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_terminal(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    ui: &mut UiState,
    config: &ConsoleConfig,
) {
    let pane = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" agent@local:~/workspace ", dim()));
    let inner = pane.inner(area);
    frame.render_widget(pane, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    draw_log(frame, rows[0], session, ui);
    draw_input(frame, rows[1], session, ui, config);
}

fn draw_log(frame: &mut Frame, area: Rect, session: &Session, ui: &mut UiState) {
    let height = area.height as usize;
    ui.log_viewport = height;

    let entries = session.log().entries();
    // Window of `height` lines ending `ui.scroll` above the bottom.
    let end = entries.len().saturating_sub(ui.scroll);
    let start = end.saturating_sub(height);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.timestamp), dim()),
                Span::styled(entry.message.clone(), kind_style(entry.kind)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    ui: &mut UiState,
    config: &ConsoleConfig,
) {
    let prompt = Span::styled(
        format!("{} ", config.prompt),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );

    let line = if session.deploying() {
        Line::from(vec![
            prompt,
            Span::styled(
                format!("{} deploying...", ui.spinner_tick()),
                Style::default().fg(Color::Cyan),
            ),
        ])
    } else if ui.input.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(config.placeholder.clone(), dim().add_modifier(Modifier::ITALIC)),
        ])
    } else {
        Line::from(vec![prompt, Span::raw(ui.input.clone())])
    };

    frame.render_widget(Paragraph::new(line), area);

    if !session.deploying() {
        // Prompt glyph plus trailing space precede the caret.
        let caret_x = area.x + 2 + ui.input.chars().count() as u16;
        frame.set_cursor(caret_x.min(area.right().saturating_sub(1)), area.y);
    }
}
