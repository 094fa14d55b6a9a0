mod config;

pub use config::{get_api_base_url, init_app_config, DEFAULT_CENTER, DEFAULT_ZOOM};
