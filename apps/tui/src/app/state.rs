use crate::api;
use crate::app::actions::AppActions;
use crate::app::globe::GlobeView;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::config::init_app_config;
use crate::domain::{Project, ViewMode};
use color_eyre::Result;
use std::time::Instant;

/// An open popup on the 2D map. Markup is rendered through
/// `domain::markup_lines` at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPopup {
    pub project_index: usize,
    pub markup: String,
}

/// Whole session state, owned by the event loop and touched only from it.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    /// Which view is visible. Exactly one at any time.
    pub view_mode: ViewMode,
    pub projects: Vec<Project>,
    pub selected_marker: usize,
    pub popup: Option<MarkerPopup>,
    /// Marker index whose weather the event loop should fetch next.
    pub pending_weather: Option<usize>,
    /// Globe view, constructed lazily on the first switch to 3D and never
    /// torn down. The Option doubles as the construct-once guard.
    pub globe: Option<GlobeView>,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub actions: AppActions,
}

impl App {
    pub fn new() -> Self {
        Self::with_actions(AppActions::new())
    }

    pub fn with_actions(actions: AppActions) -> Self {
        Self {
            running: true,
            view_mode: ViewMode::default(),
            projects: Vec::new(),
            selected_marker: 0,
            popup: None,
            pending_weather: None,
            globe: None,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            actions,
        }
    }

    /// Startup load: configuration, then the project list. A failure leaves
    /// the list empty and the session still usable.
    pub async fn initialize(&mut self) -> Result<()> {
        let base_url = init_app_config()?;
        self.actions = AppActions::with_client(api::Client::new(base_url));

        self.projects = self.actions.load_projects().await?;
        self.status_message = format!("Loaded {} projects", self.projects.len());

        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// The single view transition. 2D -> 3D constructs the globe view the
    /// first time; 3D -> 2D hides it without teardown.
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        if self.view_mode == ViewMode::ThreeD && self.globe.is_none() {
            self.globe = Some(GlobeView::frame(&self.projects));
        }
    }

    /// Label for the toggle control in the current mode.
    pub const fn toggle_label(&self) -> &'static str {
        self.view_mode.toggle_label()
    }

    pub fn marker_count(&self) -> usize {
        self.projects.len()
    }

    pub fn select_next_marker(&mut self) {
        self.selected_marker = wrap_increment(self.selected_marker, self.projects.len());
    }

    pub fn select_prev_marker(&mut self) {
        self.selected_marker = wrap_decrement(self.selected_marker, self.projects.len());
    }

    /// Marker activation: queue a weather fetch for the selected marker.
    /// The event loop services it; see `event::loop_handler`.
    pub fn request_weather(&mut self) {
        if !self.projects.is_empty() {
            self.pending_weather = Some(self.selected_marker);
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_marker)
    }
}
