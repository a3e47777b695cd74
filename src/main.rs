mod action;
mod app;
mod cache;
mod config;
mod error;
mod event;
mod gate;
mod navigation;
mod pagination;
mod selection;
mod source;
mod swapi;
mod tui;
mod types;
mod ui;

use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::event::Event;
use crate::navigation::Navigator;
use crate::source::DataSource;
use crate::swapi::Swapi;
use crate::tui::EventHandler;

/// Browse Star Wars characters and the films they appear in
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of a SWAPI-compatible API (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref()).with_api_url(cli.api_url);
    tracing::info!(base_url = %config.api.base_url, "starting");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let source: Arc<dyn DataSource> = Arc::new(Swapi::new(&config.api.base_url)?);

    let result = run(source, &config).await;

    tui::restore()?;

    result
}

async fn run(
    source: Arc<dyn DataSource>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = tui::init()?;

    // Fetch results and user intents share one queue
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    tracing::debug!(source = source.name(), "navigator ready");
    let mut app = App::new(Navigator::new(source, action_tx.clone()));

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(16));
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(tick_rate, render_rate);

    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
