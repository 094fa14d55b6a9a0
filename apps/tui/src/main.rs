use clap::Parser;
use color_eyre::Result;
use fieldmap::app::App;
use fieldmap::cli::CliArgs;
use fieldmap::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state
    let mut app = App::new();

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        // Run in headless mode
        return event::run_headless(&mut app, args.json).await;
    }

    // Load the project list; a failure leaves the map empty but usable
    if let Err(e) = app.initialize().await {
        eprintln!("Error loading projects: {e}");
        eprintln!("Will continue with an empty map");
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
