use crate::app::state::App;
use crossterm::event::KeyCode;

/// Bindings for the 2D map view. Enter is the marker activation, the click
/// analog: it queues a weather fetch for the selected marker and the event
/// loop opens the popup when the response lands.
pub fn handle_map_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_prev_marker();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_marker();
        }
        KeyCode::Enter => {
            app.request_weather();
        }
        KeyCode::Esc => {
            if app.popup.take().is_none() {
                app.running = false;
            }
        }
        _ => {}
    }
}
