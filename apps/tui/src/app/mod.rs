// App module for fieldmap
// Handles application state and view logic

pub mod actions;
pub mod globe;
pub mod input;
pub mod state;

pub use globe::{GlobeEntity, GlobeView};
pub use input::handle_input;
pub use state::{App, MarkerPopup};
