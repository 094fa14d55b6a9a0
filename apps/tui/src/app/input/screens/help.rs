use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns true when the key toggled the help overlay and needs no further
/// handling.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('?')) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help && matches!(key, KeyCode::Esc) {
        app.show_help = false;
        return true;
    }

    false
}
