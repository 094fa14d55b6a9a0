use crate::ui::widgets::popup::centered_rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        TextLine::from(Span::styled(
            "Fieldmap keys",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(vec![key("t / Tab"), Span::raw("  toggle 2D map / globe")]),
        TextLine::from(vec![key("\u{2191} / \u{2193}"), Span::raw("  select site or entity")]),
        TextLine::from(vec![
            key("Enter"),
            Span::raw("  fetch weather for the selected site (map view)"),
        ]),
        TextLine::from(vec![
            key("\u{2190} / \u{2192}"),
            Span::raw("  rotate the globe (globe view)"),
        ]),
        TextLine::from(vec![key("Esc"), Span::raw("  close popup / quit")]),
        TextLine::from(vec![key("?"), Span::raw("  toggle this help")]),
        TextLine::from(vec![key("q"), Span::raw("  quit")]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
