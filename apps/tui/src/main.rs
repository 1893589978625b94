use clap::Parser;
use color_eyre::Result;
use portfolio_tui::cli::CliArgs;
use portfolio_tui::config::init_app_config;
use portfolio_tui::{event, headless, logging, terminal, App};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;
    let (log_path, _log_guard) = logging::init_logging(&config.log_dir, &config.log_level)?;

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return headless::run_headless(
            config.session_config(),
            &config.catalogue,
            args.json,
            args.select.as_deref(),
        )
        .await;
    }

    let mut app = App::new(config.session_config(), config.catalogue.to_string());
    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app, &config.catalogue).await;

    terminal::cleanup_terminal_state(true, true);
    eprintln!("Log file: {}", log_path.display());

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
