//! CLI entrypoint for pollcast
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use pollcast_application::{
    AuthEvent, AuthenticationCoordinator, ChannelPollObserver, NoUrlOpener, PollController,
    PollEvent, StartPollInput, UrlOpener,
};
use pollcast_domain::AuthenticationStatus;
use pollcast_infrastructure::{
    BrowserUrlOpener, ConfigLoader, SimulatedPlatform, SimulationSettings,
};
use pollcast_presentation::{Cli, ConsoleFormatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in file_config.validate() {
        warn!("Config: {}", issue);
    }

    let title = match cli.title.or_else(|| file_config.poll.title.clone()) {
        Some(title) => title,
        None => bail!("A poll title is required."),
    };
    let choices = if cli.choices.is_empty() {
        file_config.poll.choices.clone()
    } else {
        cli.choices
    };
    if choices.len() < 2 {
        bail!("At least two choices are required. Use -c <CHOICE> for each one.");
    }
    let duration = cli.duration.unwrap_or(file_config.poll.duration_secs);

    info!("Starting pollcast");

    // === Dependency Injection ===
    let config = file_config.to_coordinator_config();
    let platform = Arc::new(SimulatedPlatform::new(SimulationSettings::from(
        &file_config.simulation,
    )));
    let opener: Arc<dyn UrlOpener> = if cli.no_browser {
        Arc::new(NoUrlOpener)
    } else {
        Arc::new(BrowserUrlOpener)
    };
    let auto_open = file_config.auth.auto_open_browser && !cli.no_browser;

    // Login
    let (auth_tx, mut auth_rx) = mpsc::unbounded_channel();
    let auth = Arc::new(AuthenticationCoordinator::new(
        platform.clone(),
        opener,
        config.clone(),
        auth_tx,
    ));
    let validation = auth.start_validation(auto_open);

    while let Some(event) = auth_rx.recv().await {
        match event {
            AuthEvent::StatusChanged(status) => {
                println!("{}", ConsoleFormatter::format_status(status));
                if status == AuthenticationStatus::Error {
                    bail!("Authentication failed, see the log for details.");
                }
            }
            AuthEvent::ReadyForAuthentication => {
                println!(
                    "{}",
                    ConsoleFormatter::format_confirmation_prompt(&auth.confirmation_url())
                );
            }
            AuthEvent::Authenticated => break,
        }
    }
    validation.await?;

    // Poll
    let controller = PollController::new(platform, auth, config);
    let (observer, mut poll_rx) = ChannelPollObserver::channel();
    let input = StartPollInput::new(title.clone(), choices).with_duration(duration);

    println!();
    println!("Poll: {}", title);
    println!();

    let monitor = controller.start_session(input, observer);

    let early_end = async {
        match (cli.stop_after, cli.delete_after) {
            (Some(secs), _) => {
                tokio::time::sleep(Duration::from_secs(secs)).await;
                controller.stop_session().await;
            }
            (_, Some(secs)) => {
                tokio::time::sleep(Duration::from_secs(secs)).await;
                controller.delete_session().await;
            }
            _ => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(early_end);
    let mut ended_early = false;

    loop {
        tokio::select! {
            event = poll_rx.recv() => match event {
                Some(PollEvent::Updated(tallies)) => {
                    print!("{}", ConsoleFormatter::format_tallies(&tallies));
                    println!();
                }
                Some(PollEvent::Ended(result)) => {
                    print!("{}", ConsoleFormatter::format_result(&result));
                    break;
                }
                None => {
                    warn!("Poll ended without a result");
                    break;
                }
            },
            _ = &mut early_end, if !ended_early => ended_early = true,
        }
    }

    if let Some(monitor) = monitor {
        monitor.await?;
    }

    Ok(())
}
