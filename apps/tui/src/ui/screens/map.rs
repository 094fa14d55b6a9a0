use crate::app::App;
use crate::ui::render::{render_shortcuts, render_status_bar, render_title_bar, view_layout};
use crate::ui::widgets::map_view::render_map_canvas;
use crate::ui::widgets::popup::render_marker_popup;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_map_view(app: &App, f: &mut Frame<'_>) {
    let chunks = view_layout(f);

    render_title_bar(app, f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(chunks[1]);

    render_map_canvas(app, f, content[0]);
    render_site_list(app, f, content[1]);

    render_status_bar(app, f, chunks[2]);
    render_shortcuts(
        f,
        chunks[3],
        &[
            ("\u{2191}/\u{2193}", "Select site"),
            ("Enter", "Weather popup"),
            ("t", "Toggle view"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    );

    if let Some(popup) = &app.popup {
        let area = f.area();
        render_marker_popup(f, popup, area);
    }
}

fn render_site_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.projects.is_empty() {
        let block = Block::default()
            .title(" Sites ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No projects loaded.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let rows = app.projects.iter().enumerate().map(|(i, project)| {
        let style = if i == app.selected_marker {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Row::new(vec![
            Cell::from(project.name.clone()),
            Cell::from(project.location.clone()),
        ])
        .style(style)
    });

    let widths = [Constraint::Percentage(55), Constraint::Percentage(45)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .title(format!(
                    " Sites ({} of {}) ",
                    app.selected_marker + 1,
                    app.projects.len()
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
