use crate::domain::{Project, WeatherSample};
use thiserror::Error;

/// Failure talking to the backend. Transport covers connection errors and
/// bodies that fail to decode; Status covers non-2xx responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}

/// Thin wrapper over `reqwest::Client` for the two backend endpoints.
///
/// No retries and no timeouts: a failed request surfaces to the caller and
/// the next activation simply issues a new one.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// `GET /projects`: the full project list, unpaginated.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = format!("{}/projects", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/projects",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// `GET /weather?lat=..&lon=..`: current conditions for one coordinate.
    /// Coordinates go out as plain decimal query values, unvalidated.
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSample, ApiError> {
        // Display-formatted floats, matching what the backend parses; 1.0
        // goes out as "lat=1"
        let url = format!("{}/weather?lat={lat}&lon={lon}", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/weather",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    async fn serve(router: Router) -> Result<String, Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn fetch_projects_decodes_list() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/projects",
            get(|| async {
                Json(serde_json::json!([
                    {"name": "Delta Pump Upgrade", "location": "Tracy, CA", "lat": 37.7, "lon": -121.4},
                    {"name": "Solar Array B", "location": "Fresno, CA", "lat": 36.7, "lon": -119.8}
                ]))
            }),
        );
        let base = serve(router).await?;

        let projects = Client::new(base).fetch_projects().await?;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Delta Pump Upgrade");
        assert!((projects[1].lat - 36.7).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn fetch_projects_accepts_empty_list() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route("/projects", get(|| async { Json(serde_json::json!([])) }));
        let base = serve(router).await?;

        let projects = Client::new(base).fetch_projects().await?;
        assert!(projects.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fetch_weather_sends_coordinates_as_query() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/weather",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("lat").map(String::as_str), Some("1"));
                assert_eq!(params.get("lon").map(String::as_str), Some("2"));
                Json(serde_json::json!({"temperature": 20.0}))
            }),
        );
        let base = serve(router).await?;

        let sample = Client::new(base).fetch_weather(1.0, 2.0).await?;
        assert!((sample.temperature - 20.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_becomes_error() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/weather",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(router).await?;

        let result = Client::new(base).fetch_weather(37.5, -120.0).await;
        match result {
            Err(ApiError::Status { endpoint, status }) => {
                assert_eq!(endpoint, "/weather");
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            }
            other => panic!("expected status error, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_becomes_transport_error() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route("/projects", get(|| async { "not json" }));
        let base = serve(router).await?;

        let result = Client::new(base).fetch_projects().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));

        Ok(())
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route("/projects", get(|| async { Json(serde_json::json!([])) }));
        let base = serve(router).await?;

        let projects = Client::new(format!("{base}/")).fetch_projects().await?;
        assert!(projects.is_empty());

        Ok(())
    }
}
