use crate::app::App;
use crate::config::{DEFAULT_CENTER, DEFAULT_ZOOM};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Tiles visible across the canvas width; with web-map zoom levels this
/// gives a ~22.5 degree wide window at zoom 6.
const VISIBLE_TILES: f64 = 4.0;

/// Terminal cells are roughly twice as tall as wide, so halve the vertical
/// span to keep the region undistorted.
const LAT_ASPECT: f64 = 0.5;

#[derive(Debug, PartialEq)]
pub struct ViewBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ViewBounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon >= self.x[0] && lon <= self.x[1] && lat >= self.y[0] && lat <= self.y[1]
    }
}

/// Geographic window for a center and web-map zoom level.
pub fn view_bounds(center: (f64, f64), zoom: u8) -> ViewBounds {
    let lon_span = 360.0 / 2_f64.powi(i32::from(zoom)) * VISIBLE_TILES;
    let lat_span = lon_span * LAT_ASPECT;

    let (lat, lon) = center;
    ViewBounds {
        x: [lon - lon_span / 2.0, lon + lon_span / 2.0],
        y: [
            (lat - lat_span / 2.0).max(-85.0),
            (lat + lat_span / 2.0).min(85.0),
        ],
    }
}

/// 2D map: world shape clipped to the region window, one marker per
/// project, selected marker pulsing with the animation counter.
pub fn render_map_canvas(app: &App, f: &mut Frame<'_>, area: Rect) {
    let bounds = view_bounds(DEFAULT_CENTER, DEFAULT_ZOOM);

    let markers: Vec<(f64, f64)> = app
        .projects
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != app.selected_marker)
        .map(|(_, p)| (p.lon, p.lat))
        .collect();
    let selected = app.selected_project();

    let block = Block::default()
        .title(" Map ")
        .title_bottom(TextLine::styled(
            " \u{a9} OpenStreetMap contributors ",
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let pulse = (app.animation_counter).sin().mul_add(0.15, 0.35);

    f.render_widget(
        Canvas::default()
            .block(block)
            .x_bounds(bounds.x)
            .y_bounds(bounds.y)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });

                ctx.draw(&Points {
                    coords: &markers,
                    color: Color::Blue,
                });

                if let Some(project) = selected {
                    ctx.draw(&Circle {
                        x: project.lon,
                        y: project.lat,
                        radius: pulse,
                        color: Color::Yellow,
                    });
                    ctx.draw(&Points {
                        coords: &[(project.lon, project.lat)],
                        color: Color::Yellow,
                    });
                    ctx.print(
                        project.lon + 0.5,
                        project.lat + 0.5,
                        TextLine::styled(
                            project.name.clone(),
                            Style::default().fg(Color::White),
                        ),
                    );
                }
            }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_the_central_valley() {
        let bounds = view_bounds(DEFAULT_CENTER, DEFAULT_ZOOM);
        assert!((bounds.x[1] - bounds.x[0] - 22.5).abs() < 1e-9);
        assert!(bounds.contains(DEFAULT_CENTER.0, DEFAULT_CENTER.1));
        // Sacramento and Fresno both fit at the default zoom
        assert!(bounds.contains(38.58, -121.49));
        assert!(bounds.contains(36.74, -119.79));
    }

    #[test]
    fn latitude_window_is_clamped_at_the_poles() {
        let bounds = view_bounds((89.0, 0.0), 1);
        assert!(bounds.y[1] <= 85.0);
    }
}
