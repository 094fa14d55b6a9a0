// UI module for fieldmap
// Dispatches rendering to whichever view is visible

pub mod render;
pub mod screens;
pub mod widgets;

use crate::app::App;
use crate::domain::ViewMode;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(f);
        return;
    }

    match app.view_mode {
        ViewMode::TwoD => screens::map::render_map_view(app, f),
        ViewMode::ThreeD => screens::globe::render_globe_view(app, f),
    }
}
