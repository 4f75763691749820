mod config;
mod date;
mod error;
mod github;
mod lookup;
mod view;

use config::{load as config_load, validate as config_validate};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config_load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = config_validate(&config) {
        eprintln!("Configuration error: {err}");
        std::process::exit(2);
    }

    info!(
        github_config = ?config.github.sanitized_for_log(),
        "Effective configuration loaded"
    );

    // The credential is threaded in once here; no global state.
    let client = github::GithubClient::new(&config.github);
    let mut view = view::TerminalView::new();

    let usernames: Vec<String> = std::env::args().skip(1).collect();

    if usernames.is_empty() {
        if let Err(err) = lookup::run_interactive(&client, &mut view) {
            error!(error = %err, "Failed to read input");
            std::process::exit(1);
        }
    } else if !lookup::run_all(&client, &mut view, &usernames) {
        std::process::exit(1);
    }
}
