//! Chrome shared by both views: title bar, status bar, shortcut hints.

use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn view_layout(f: &Frame<'_>) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(5),    // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

pub fn render_title_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Fieldmap ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} view", app.view_mode.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} sites", app.marker_count()),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, inner);
}

pub fn render_status_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(status_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let message = Paragraph::new(Span::styled(
        app.status_message.clone(),
        Style::default().fg(Color::Green),
    ))
    .alignment(Alignment::Left);
    f.render_widget(message, inner);

    // The toggle control and its mode-dependent label
    let toggle = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "[t] ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(app.toggle_label()),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(toggle, inner);
}

pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {action}   ")));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}
