use serde::Deserialize;

/// A located site to display on the map, as served by `GET /projects`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    /// Free-text label, not an address
    pub location: String,
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for one coordinate, as served by `GET /weather`.
///
/// Fetched per marker activation and never cached; a repeat activation
/// issues a fresh request.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeatherSample {
    pub temperature: f64,
}

/// Which of the two views is currently rendered. Exactly one is visible
/// at any time; the globe view keeps its state while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    TwoD,
    ThreeD,
}

impl ViewMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::TwoD => Self::ThreeD,
            Self::ThreeD => Self::TwoD,
        }
    }

    /// Label for the toggle control while this mode is active.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::TwoD => "Switch to 3D",
            Self::ThreeD => "Switch to 2D",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::TwoD => "Map",
            Self::ThreeD => "Globe",
        }
    }
}

/// Popup content for a marker activation on the 2D map.
///
/// The markup shape is part of the backend-facing contract and is rendered
/// by [`markup_lines`].
pub fn popup_markup(project: &Project, weather: WeatherSample) -> String {
    format!(
        "<b>{}</b><br>{}<br>Temp: {}\u{b0}C",
        project.name, project.location, weather.temperature
    )
}

/// Static description for a globe entity. No live weather in this view;
/// the map view is the only one that fetches on activation.
pub fn entity_description(project: &Project) -> String {
    format!("<b>{}</b><br>{}", project.name, project.location)
}

/// Split popup markup into display lines, dropping the bold tags that the
/// terminal renders with a style instead.
pub fn markup_lines(markup: &str) -> Vec<String> {
    markup
        .split("<br>")
        .map(|part| part.replace("<b>", "").replace("</b>", ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            name: "A".to_string(),
            location: "L".to_string(),
            lat: 1.0,
            lon: 2.0,
        }
    }

    #[test]
    fn popup_markup_matches_contract() {
        let markup = popup_markup(&sample_project(), WeatherSample { temperature: 20.0 });
        assert_eq!(markup, "<b>A</b><br>L<br>Temp: 20\u{b0}C");
    }

    #[test]
    fn popup_markup_keeps_fractional_temperature() {
        let markup = popup_markup(&sample_project(), WeatherSample { temperature: -3.5 });
        assert_eq!(markup, "<b>A</b><br>L<br>Temp: -3.5\u{b0}C");
    }

    #[test]
    fn markup_lines_strip_bold_tags() {
        let lines = markup_lines("<b>A</b><br>L<br>Temp: 20\u{b0}C");
        assert_eq!(lines, vec!["A", "L", "Temp: 20\u{b0}C"]);
    }

    #[test]
    fn entity_description_is_static() {
        assert_eq!(entity_description(&sample_project()), "<b>A</b><br>L");
    }

    #[test]
    fn double_toggle_is_identity() {
        let mode = ViewMode::default();
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn toggle_labels_name_the_other_view() {
        assert_eq!(ViewMode::TwoD.toggle_label(), "Switch to 3D");
        assert_eq!(ViewMode::ThreeD.toggle_label(), "Switch to 2D");
    }
}
