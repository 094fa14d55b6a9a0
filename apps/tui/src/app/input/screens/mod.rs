use crate::app::state::App;
use crate::domain::ViewMode;
use crossterm::event::KeyCode;

mod globe;
mod help;
mod map;

/// Route a key press: global keys first (quit, view toggle, help), then the
/// visible view's own bindings.
pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        if help::handle_help_toggle(app, key) {
            return;
        }
        // Any other key just stays on the help overlay
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('t') | KeyCode::Tab => {
            app.toggle_view();
            return;
        }
        _ => {}
    }

    match app.view_mode {
        ViewMode::TwoD => map::handle_map_input(app, key),
        ViewMode::ThreeD => globe::handle_globe_input(app, key),
    }
}
