use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "fieldmap", version, about = "Project site map TUI")]
pub struct CliArgs {
    /// Print project stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(api) = &self.api {
            std::env::set_var("API_BASE_URL", api);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
