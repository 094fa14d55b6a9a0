use crate::app::App;
use crate::domain::markup_lines;
use crate::ui::render::{render_shortcuts, render_status_bar, render_title_bar, view_layout};
use crate::ui::widgets::globe_view::render_globe_canvas;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_globe_view(app: &App, f: &mut Frame<'_>) {
    let chunks = view_layout(f);

    render_title_bar(app, f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(chunks[1]);

    if let Some(globe) = &app.globe {
        render_globe_canvas(globe, f, content[0]);
        render_entity_panel(app, f, content[1]);
    } else {
        // Only reachable if the view mode was forced without a toggle
        let placeholder = Paragraph::new("Globe not initialized")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, chunks[1]);
    }

    render_status_bar(app, f, chunks[2]);
    render_shortcuts(
        f,
        chunks[3],
        &[
            ("\u{2191}/\u{2193}", "Select entity"),
            ("\u{2190}/\u{2192}", "Rotate"),
            ("t", "Toggle view"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    );
}

fn render_entity_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(globe) = &app.globe else {
        return;
    };

    let block = Block::default()
        .title(format!(" Entities ({}) ", globe.entities.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    if globe.entities.is_empty() {
        let paragraph = Paragraph::new("No entities.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines: Vec<TextLine<'_>> = Vec::new();
    for (i, entity) in globe.entities.iter().enumerate() {
        let marker = if i == globe.selected_entity { "\u{25cf} " } else { "  " };
        let name = markup_lines(&entity.description)
            .first()
            .cloned()
            .unwrap_or_default();
        let style = if i == globe.selected_entity {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(TextLine::from(vec![
            Span::styled(marker, Style::default().fg(Color::Red)),
            Span::styled(name, style),
        ]));
    }

    // Static description of the selected entity; the globe never fetches
    // live weather
    if let Some(entity) = globe.entities.get(globe.selected_entity) {
        lines.push(TextLine::from(""));
        for line in markup_lines(&entity.description) {
            lines.push(TextLine::from(Span::styled(
                line,
                Style::default().fg(Color::Red),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
