use dotenv::dotenv;
use std::env;

/// Initial map camera: Central Valley, matching the backend's project data.
pub const DEFAULT_CENTER: (f64, f64) = (37.5, -120.0);

/// Initial map zoom, in web-map zoom levels.
pub const DEFAULT_ZOOM: u8 = 6;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Initializes the application configuration
/// Returns the base URL of the projects/weather backend
pub fn init_app_config() -> color_eyre::eyre::Result<String> {
    // Load environment variables from .env file
    dotenv().ok();

    Ok(get_api_base_url())
}

/// Gets the backend base URL, without a trailing slash
pub fn get_api_base_url() -> String {
    env::var("API_BASE_URL").map_or_else(
        |_| DEFAULT_API_BASE_URL.to_string(),
        |url| url.trim_end_matches('/').to_string(),
    )
}
