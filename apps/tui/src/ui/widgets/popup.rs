use crate::app::MarkerPopup;
use crate::domain::markup_lines;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Marker popup: name, location, live temperature. First markup line is the
/// bold one.
pub fn render_marker_popup(f: &mut Frame<'_>, popup: &MarkerPopup, area: Rect) {
    let popup_area = centered_rect(44, 30, area);
    f.render_widget(Clear, popup_area);

    let lines: Vec<TextLine<'_>> = markup_lines(&popup.markup)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(Span::styled(line, style))
        })
        .collect();

    let block = Block::default()
        .title(" Weather ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, popup_area);
}
