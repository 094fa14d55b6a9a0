use crate::config::DEFAULT_CENTER;
use crate::domain::{entity_description, Project};

/// Camera radius that shows the whole visible hemisphere.
pub const WHOLE_GLOBE_RADIUS_DEG: f64 = 90.0;

/// Never frame tighter than this, so single-site lists still show context.
const MIN_FRAME_RADIUS_DEG: f64 = 10.0;

/// Breathing room around the framed entities.
const FRAME_MARGIN: f64 = 1.2;

/// One point entity on the globe. Description is fixed at construction;
/// this view never fetches weather.
#[derive(Debug, Clone)]
pub struct GlobeEntity {
    pub lat: f64,
    pub lon: f64,
    pub description: String,
}

/// State for the globe view: camera plus entities.
///
/// Constructed once per session, on the first switch to 3D, and kept alive
/// while hidden so switching back is instant.
#[derive(Debug)]
pub struct GlobeView {
    pub camera_lat: f64,
    pub camera_lon: f64,
    /// Angular radius of the framed region, in degrees.
    pub angular_radius: f64,
    pub entities: Vec<GlobeEntity>,
    pub selected_entity: usize,
}

impl GlobeView {
    /// Build the view with one entity per project and the camera framed to
    /// fit them all. An empty list frames the default center at whole-globe
    /// radius.
    pub fn frame(projects: &[Project]) -> Self {
        let entities: Vec<GlobeEntity> = projects
            .iter()
            .map(|project| GlobeEntity {
                lat: project.lat,
                lon: project.lon,
                description: entity_description(project),
            })
            .collect();

        let (camera_lat, camera_lon, angular_radius) = if entities.is_empty() {
            (DEFAULT_CENTER.0, DEFAULT_CENTER.1, WHOLE_GLOBE_RADIUS_DEG)
        } else {
            let mut min_lat = f64::INFINITY;
            let mut max_lat = f64::NEG_INFINITY;
            let mut min_lon = f64::INFINITY;
            let mut max_lon = f64::NEG_INFINITY;
            for entity in &entities {
                min_lat = min_lat.min(entity.lat);
                max_lat = max_lat.max(entity.lat);
                min_lon = min_lon.min(entity.lon);
                max_lon = max_lon.max(entity.lon);
            }

            // Midpoint framing; fine for regional data, which is what the
            // backend serves. Antimeridian-straddling lists frame wide.
            let center_lat = (min_lat + max_lat) / 2.0;
            let center_lon = (min_lon + max_lon) / 2.0;

            let spread = entities
                .iter()
                .map(|entity| {
                    central_angle_deg((center_lat, center_lon), (entity.lat, entity.lon))
                })
                .fold(0.0_f64, f64::max);

            let radius =
                (spread * FRAME_MARGIN).clamp(MIN_FRAME_RADIUS_DEG, WHOLE_GLOBE_RADIUS_DEG);

            (center_lat, center_lon, radius)
        };

        Self {
            camera_lat,
            camera_lon,
            angular_radius,
            entities,
            selected_entity: 0,
        }
    }

    /// Rotate the camera, clamping latitude short of the poles and wrapping
    /// longitude into [-180, 180].
    pub fn rotate(&mut self, delta_lat: f64, delta_lon: f64) {
        self.camera_lat = (self.camera_lat + delta_lat).clamp(-89.0, 89.0);
        self.camera_lon = wrap_longitude(self.camera_lon + delta_lon);
    }

    /// Projection scale so the framed region fills the canvas; 1.0 at
    /// whole-globe radius.
    pub fn scale(&self) -> f64 {
        1.0 / self.angular_radius.to_radians().sin().max(1e-6)
    }

    pub fn select_next(&mut self) {
        if !self.entities.is_empty() {
            self.selected_entity = (self.selected_entity + 1) % self.entities.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.entities.is_empty() {
            self.selected_entity =
                (self.selected_entity + self.entities.len() - 1) % self.entities.len();
        }
    }
}

/// Project a coordinate orthographically onto the unit disk as seen from
/// the camera. Returns None for points on the hidden hemisphere.
pub fn project_orthographic(
    lat: f64,
    lon: f64,
    camera_lat: f64,
    camera_lon: f64,
) -> Option<(f64, f64)> {
    let lat = lat.to_radians();
    let lon = lon.to_radians();
    let cam_lat = camera_lat.to_radians();
    let cam_lon = camera_lon.to_radians();
    let delta_lon = lon - cam_lon;

    let cos_c = cam_lat.sin() * lat.sin() + cam_lat.cos() * lat.cos() * delta_lon.cos();
    if cos_c <= 0.0 {
        return None;
    }

    let x = lat.cos() * delta_lon.sin();
    let y = cam_lat.cos() * lat.sin() - cam_lat.sin() * lat.cos() * delta_lon.cos();
    Some((x, y))
}

/// Great-circle angle between two (lat, lon) pairs, in degrees.
pub fn central_angle_deg(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat_a, lon_a) = (a.0.to_radians(), a.1.to_radians());
    let (lat_b, lon_b) = (b.0.to_radians(), b.1.to_radians());

    let cos_c = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_b - lon_a).cos();
    cos_c.clamp(-1.0, 1.0).acos().to_degrees()
}

fn wrap_longitude(lon: f64) -> f64 {
    let mut lon = lon;
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, lat: f64, lon: f64) -> Project {
        Project {
            name: name.to_string(),
            location: "somewhere".to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn empty_list_frames_default_center() {
        let view = GlobeView::frame(&[]);
        assert!(view.entities.is_empty());
        assert!((view.camera_lat - DEFAULT_CENTER.0).abs() < f64::EPSILON);
        assert!((view.camera_lon - DEFAULT_CENTER.1).abs() < f64::EPSILON);
        assert!((view.angular_radius - WHOLE_GLOBE_RADIUS_DEG).abs() < f64::EPSILON);
    }

    #[test]
    fn one_entity_per_project() {
        let projects = vec![
            project("a", 36.0, -120.0),
            project("b", 38.0, -121.0),
            project("c", 37.0, -119.5),
        ];
        let view = GlobeView::frame(&projects);
        assert_eq!(view.entities.len(), projects.len());
    }

    #[test]
    fn camera_centers_on_single_project() {
        let view = GlobeView::frame(&[project("a", 37.7, -121.4)]);
        assert!((view.camera_lat - 37.7).abs() < 1e-9);
        assert!((view.camera_lon - -121.4).abs() < 1e-9);
        assert!((view.angular_radius - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn framed_entities_are_all_visible() {
        let projects = vec![
            project("a", 36.0, -120.0),
            project("b", 40.0, -115.0),
            project("c", 33.0, -124.0),
        ];
        let view = GlobeView::frame(&projects);
        let visible = view
            .entities
            .iter()
            .filter(|entity| {
                project_orthographic(entity.lat, entity.lon, view.camera_lat, view.camera_lon)
                    .is_some()
            })
            .count();
        assert_eq!(visible, projects.len());
    }

    #[test]
    fn camera_center_projects_to_origin() {
        let (x, y) = project_orthographic(37.5, -120.0, 37.5, -120.0)
            .unwrap_or((f64::NAN, f64::NAN));
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn antipode_is_culled() {
        assert!(project_orthographic(-37.5, 60.0, 37.5, -120.0).is_none());
    }

    #[test]
    fn rotation_wraps_longitude_and_clamps_latitude() {
        let mut view = GlobeView::frame(&[]);
        view.rotate(0.0, 250.0);
        assert!(view.camera_lon <= 180.0 && view.camera_lon >= -180.0);
        view.rotate(120.0, 0.0);
        assert!((view.camera_lat - 89.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entity_selection_wraps() {
        let mut view = GlobeView::frame(&[project("a", 36.0, -120.0), project("b", 38.0, -121.0)]);
        view.select_prev();
        assert_eq!(view.selected_entity, 1);
        view.select_next();
        assert_eq!(view.selected_entity, 0);
    }

    #[test]
    fn central_angle_of_identical_points_is_zero() {
        assert!(central_angle_deg((37.5, -120.0), (37.5, -120.0)).abs() < 1e-9);
    }
}
