use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;

use crate::app::{handle_input, App, MarkerPopup};
use crate::domain::popup_markup;
use crate::ui;

// Define states for the per-activation weather fetch
#[derive(Clone, Copy, PartialEq, Debug)]
enum WeatherFetchState {
    Idle,
    Fetching,
    Success,
    Error,
}

impl fmt::Display for WeatherFetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Define events for the weather fetch
#[derive(Clone, Debug)]
enum WeatherFetchEvent {
    Start { index: usize },
    Loaded { index: usize, markup: String },
    Failed(String),
    Reset,
}

impl fmt::Display for WeatherFetchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { index } => write!(f, "Start({index})"),
            Self::Loaded { index, .. } => write!(f, "Loaded({index})"),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Define a custom error type for state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: WeatherFetchState,
    event: WeatherFetchEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

// State machine serializing weather fetches on the event loop. One fetch in
// flight at a time, so a response always belongs to the activation that
// requested it.
struct WeatherFetchMachine {
    state: WeatherFetchState,
}

impl WeatherFetchMachine {
    const fn new(initial_state: WeatherFetchState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> WeatherFetchState {
        self.state
    }

    // Process an event and update the state machine and app
    fn process_event(
        &mut self,
        event: &WeatherFetchEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

// Helper struct for state transitions
struct NextState(WeatherFetchState);

impl NextState {
    const fn new(state: WeatherFetchState) -> Self {
        Self(state)
    }
}

impl WeatherFetchState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(WeatherFetchState, &WeatherFetchEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (WeatherFetchState, &WeatherFetchEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (WeatherFetchState::Idle, WeatherFetchEvent::Start { .. }) => {
                app.status_message = "Fetching weather...".to_string();
                Ok(WeatherFetchState::Fetching.next_state())
            }
            (WeatherFetchState::Fetching, WeatherFetchEvent::Loaded { index, markup }) => {
                app.popup = Some(MarkerPopup {
                    project_index: *index,
                    markup: markup.clone(),
                });
                app.status_message = "Weather updated".to_string();
                Ok(WeatherFetchState::Success.next_state())
            }
            (WeatherFetchState::Fetching, WeatherFetchEvent::Failed(error)) => {
                // No retry and no popup change; the next activation simply
                // issues a fresh request
                app.status_message = format!("Error: {error}");
                Ok(WeatherFetchState::Error.next_state())
            }
            (WeatherFetchState::Success | WeatherFetchState::Error, WeatherFetchEvent::Reset) => {
                Ok(WeatherFetchState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Service at most one queued marker activation: fetch that project's
/// weather and open the popup, or surface the error in the status bar.
async fn service_pending_weather(app: &mut App, machine: &mut WeatherFetchMachine) {
    if machine.state() != WeatherFetchState::Idle {
        return;
    }
    let Some(index) = app.pending_weather.take() else {
        return;
    };

    if machine
        .process_event(&WeatherFetchEvent::Start { index }, app)
        .is_err()
    {
        return;
    }

    let outcome = match app.projects.get(index).cloned() {
        Some(project) => app
            .actions
            .load_weather(project.lat, project.lon)
            .await
            .map(|sample| WeatherFetchEvent::Loaded {
                index,
                markup: popup_markup(&project, sample),
            })
            .unwrap_or_else(|e| WeatherFetchEvent::Failed(e.to_string())),
        None => WeatherFetchEvent::Failed(format!("no marker at index {index}")),
    };

    if machine.process_event(&outcome, app).is_err() {
        // Non-fatal state transition error
    }

    if machine.process_event(&WeatherFetchEvent::Reset, app).is_err() {
        // Non-fatal reset error
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.initialize().await?;

    let stats = build_headless_stats(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nProject Map Stats");
    println!("==================");
    println!("Total projects: {}", stats.total_projects);

    if let Some(bounds) = &stats.bounds {
        println!(
            "Bounds: lat {:.2}..{:.2}, lon {:.2}..{:.2}",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        );
    }

    println!("\nProjects:");
    for project in &stats.projects {
        println!(
            "- {} | {} | {:.4}, {:.4}",
            project.name, project.location, project.lat, project.lon
        );
    }
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let bounds = if app.projects.is_empty() {
        None
    } else {
        let mut bounds = GeoBounds {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        for project in &app.projects {
            bounds.min_lat = bounds.min_lat.min(project.lat);
            bounds.max_lat = bounds.max_lat.max(project.lat);
            bounds.min_lon = bounds.min_lon.min(project.lon);
            bounds.max_lon = bounds.max_lon.max(project.lon);
        }
        Some(bounds)
    };

    let projects = app
        .projects
        .iter()
        .map(|project| HeadlessProject {
            name: project.name.clone(),
            location: project.location.clone(),
            lat: project.lat,
            lon: project.lon,
        })
        .collect();

    HeadlessStats {
        total_projects: app.projects.len(),
        bounds,
        projects,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_projects: usize,
    bounds: Option<GeoBounds>,
    projects: Vec<HeadlessProject>,
}

#[derive(serde::Serialize)]
struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

#[derive(serde::Serialize)]
struct HeadlessProject {
    name: String,
    location: String,
    lat: f64,
    lon: f64,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut fetch_machine = WeatherFetchMachine::new(WeatherFetchState::Idle);

    loop {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Weather fetches run inline on the loop, one at a time. The
        // response therefore always matches the latest activation; there is
        // no out-of-order popup update to suppress.
        service_pending_weather(app, &mut fetch_machine).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::app::actions::AppActions;
    use crate::domain::Project;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn project(name: &str, lat: f64, lon: f64) -> Project {
        Project {
            name: name.to_string(),
            location: "L".to_string(),
            lat,
            lon,
        }
    }

    async fn app_with_flaky_weather(
        failures_before_success: usize,
    ) -> Result<App, Box<dyn std::error::Error>> {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = Router::new().route(
            "/weather",
            get(move || {
                let calls = Arc::clone(&calls);
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) < failures_before_success {
                        Err(StatusCode::INTERNAL_SERVER_ERROR)
                    } else {
                        Ok(Json(serde_json::json!({"temperature": 20.0})))
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let actions = AppActions::with_client(api::Client::new(format!("http://{addr}")));
        let mut app = App::with_actions(actions);
        app.projects = vec![project("A", 1.0, 2.0)];
        Ok(app)
    }

    #[tokio::test]
    async fn activation_opens_popup_with_weather() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app_with_flaky_weather(0).await?;
        let mut machine = WeatherFetchMachine::new(WeatherFetchState::Idle);

        app.request_weather();
        service_pending_weather(&mut app, &mut machine).await;

        let popup = app.popup.as_ref().ok_or("popup did not open")?;
        assert_eq!(popup.project_index, 0);
        assert_eq!(popup.markup, "<b>A</b><br>L<br>Temp: 20\u{b0}C");
        assert_eq!(app.status_message, "Weather updated");
        assert_eq!(machine.state(), WeatherFetchState::Idle);

        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_does_not_break_later_activations(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app_with_flaky_weather(1).await?;
        let mut machine = WeatherFetchMachine::new(WeatherFetchState::Idle);

        app.request_weather();
        service_pending_weather(&mut app, &mut machine).await;
        assert!(app.popup.is_none());
        assert!(app.status_message.starts_with("Error:"));
        assert!(app.running);

        // The machine reset to Idle, so the next activation works
        app.request_weather();
        service_pending_weather(&mut app, &mut machine).await;
        assert!(app.popup.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn stale_marker_index_is_reported_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app_with_flaky_weather(0).await?;
        let mut machine = WeatherFetchMachine::new(WeatherFetchState::Idle);

        app.pending_weather = Some(7);
        service_pending_weather(&mut app, &mut machine).await;
        assert!(app.popup.is_none());
        assert!(app.status_message.contains("no marker"));
        assert_eq!(machine.state(), WeatherFetchState::Idle);

        Ok(())
    }

    #[test]
    fn headless_stats_cover_bounds_and_counts() {
        let mut app = App::with_actions(AppActions::default());
        app.projects = vec![project("a", 36.0, -121.0), project("b", 38.0, -119.0)];

        let stats = build_headless_stats(&app);
        assert_eq!(stats.total_projects, 2);
        let bounds = stats.bounds.as_ref().map_or((0.0, 0.0), |b| (b.min_lat, b.max_lon));
        assert!((bounds.0 - 36.0).abs() < f64::EPSILON);
        assert!((bounds.1 - -119.0).abs() < f64::EPSILON);
    }

    #[test]
    fn headless_stats_for_empty_list_have_no_bounds() {
        let app = App::with_actions(AppActions::default());
        let stats = build_headless_stats(&app);
        assert_eq!(stats.total_projects, 0);
        assert!(stats.bounds.is_none());
    }
}
