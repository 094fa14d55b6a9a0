use crate::app::state::App;
use crossterm::event::KeyCode;

const ROTATE_STEP_DEG: f64 = 5.0;

/// Bindings for the globe view: up/down move the entity selection,
/// left/right rotate the camera. No weather fetch here; entity
/// descriptions are static.
pub fn handle_globe_input(app: &mut App, key: KeyCode) {
    let Some(globe) = app.globe.as_mut() else {
        return;
    };

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            globe.select_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            globe.select_next();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            globe.rotate(0.0, -ROTATE_STEP_DEG);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            globe.rotate(0.0, ROTATE_STEP_DEG);
        }
        KeyCode::Esc => {
            app.running = false;
        }
        _ => {}
    }
}
