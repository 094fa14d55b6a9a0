use crate::api;
use crate::config::get_api_base_url;
use crate::domain::{Project, WeatherSample};

/// Backend-facing side of the app: owns the HTTP client and exposes the two
/// loads the UI needs.
#[derive(Debug, Clone)]
pub struct AppActions {
    client: api::Client,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            client: api::Client::new(get_api_base_url()),
        }
    }

    pub const fn with_client(client: api::Client) -> Self {
        Self { client }
    }

    /// One-shot load at startup; the list is immutable afterwards.
    pub async fn load_projects(&self) -> Result<Vec<Project>, api::ApiError> {
        self.client.fetch_projects().await
    }

    /// On-demand load per marker activation; never cached.
    pub async fn load_weather(&self, lat: f64, lon: f64) -> Result<WeatherSample, api::ApiError> {
        self.client.fetch_weather(lat, lon).await
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}
