use crate::app::globe::{project_orthographic, GlobeView};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

const CANVAS_BOUND: f64 = 1.2;
const GRATICULE_STEP_DEG: f64 = 30.0;
const GRATICULE_SAMPLE_DEG: f64 = 3.0;

/// Graticule sample points of the visible hemisphere, scaled to the camera.
pub fn graticule_points(globe: &GlobeView) -> Vec<(f64, f64)> {
    let scale = globe.scale();
    let mut points = Vec::new();

    let mut push = |lat: f64, lon: f64| {
        if let Some((x, y)) = project_orthographic(lat, lon, globe.camera_lat, globe.camera_lon) {
            let (x, y) = (x * scale, y * scale);
            if x.abs() <= CANVAS_BOUND && y.abs() <= CANVAS_BOUND {
                points.push((x, y));
            }
        }
    };

    // Meridians
    let mut lon = -180.0;
    while lon < 180.0 {
        let mut lat = -87.0;
        while lat <= 87.0 {
            push(lat, lon);
            lat += GRATICULE_SAMPLE_DEG;
        }
        lon += GRATICULE_STEP_DEG;
    }

    // Parallels
    let mut lat = -60.0;
    while lat <= 60.0 {
        let mut lon = -180.0;
        while lon < 180.0 {
            push(lat, lon);
            lon += GRATICULE_SAMPLE_DEG;
        }
        lat += GRATICULE_STEP_DEG;
    }

    points
}

/// Entity positions on the canvas; hidden-hemisphere entities are culled.
pub fn entity_points(globe: &GlobeView) -> Vec<(f64, f64)> {
    let scale = globe.scale();
    globe
        .entities
        .iter()
        .filter_map(|entity| {
            project_orthographic(entity.lat, entity.lon, globe.camera_lat, globe.camera_lon)
        })
        .map(|(x, y)| (x * scale, y * scale))
        .collect()
}

/// Globe: outline, graticule, red point entities, selection ring.
pub fn render_globe_canvas(globe: &GlobeView, f: &mut Frame<'_>, area: Rect) {
    let graticule = graticule_points(globe);
    let entities = entity_points(globe);
    let scale = globe.scale();

    let selected = globe
        .entities
        .get(globe.selected_entity)
        .and_then(|entity| {
            project_orthographic(entity.lat, entity.lon, globe.camera_lat, globe.camera_lon)
        })
        .map(|(x, y)| (x * scale, y * scale));

    let block = Block::default()
        .title(" Globe ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Canvas::default()
            .block(block)
            .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
            .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
            .paint(|ctx| {
                // Limb of the visible hemisphere
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: scale.min(CANVAS_BOUND * 4.0),
                    color: Color::DarkGray,
                });

                ctx.draw(&Points {
                    coords: &graticule,
                    color: Color::DarkGray,
                });

                ctx.draw(&Points {
                    coords: &entities,
                    color: Color::Red,
                });

                if let Some((x, y)) = selected {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: 0.05 * scale.min(2.0),
                        color: Color::Yellow,
                    });
                }
            }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Project;

    fn project(name: &str, lat: f64, lon: f64) -> Project {
        Project {
            name: name.to_string(),
            location: "x".to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn framed_projects_all_have_canvas_points() {
        let globe = GlobeView::frame(&[
            project("a", 36.0, -120.0),
            project("b", 38.0, -121.0),
            project("c", 33.0, -117.0),
        ]);
        assert_eq!(entity_points(&globe).len(), globe.entities.len());
    }

    #[test]
    fn canvas_points_stay_inside_bounds() {
        let globe = GlobeView::frame(&[project("a", 36.0, -120.0), project("b", 52.0, 13.0)]);
        for (x, y) in entity_points(&globe).into_iter().chain(graticule_points(&globe)) {
            assert!(x.abs() <= CANVAS_BOUND + 1e-9);
            assert!(y.abs() <= CANVAS_BOUND + 1e-9);
        }
    }

    #[test]
    fn far_side_entities_are_culled() {
        let mut globe = GlobeView::frame(&[project("a", 37.5, -120.0)]);
        globe.camera_lat = -37.5;
        globe.camera_lon = 60.0;
        assert!(entity_points(&globe).is_empty());
    }
}
