use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::Event;

use candlescope::chart::controller::ChartController;
use candlescope::config::Config;
use candlescope::data::csv::load_metatrader_csv;
use candlescope::event::ChartEvent;
use candlescope::input::{parse_key, ChartCommand};
use candlescope::ui::{self, AppState};

fn main() -> Result<()> {
    // Load config
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure config/default.toml exists");
            std::process::exit(1);
        }
    };

    // Init tracing (log to file so it doesn't interfere with TUI)
    let log_file = std::fs::File::create("candlescope.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    // A CLI argument overrides the configured data file
    let csv_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.data.csv_path.clone());

    let raw = load_metatrader_csv(&csv_path)
        .with_context(|| format!("failed to load {}", csv_path))?;
    tracing::info!(count = raw.len(), path = %csv_path, "Loaded raw series");

    let display_count = config.chart.display_count;
    let mut controller = ChartController::new(raw, config.default_timeframe(), display_count)
        .context("failed to build initial chart view")?;

    let title = Path::new(&csv_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| csv_path.clone());

    let snapshot = controller.snapshot();
    let mut app_state = AppState::new(
        &title,
        controller.timeframe(),
        snapshot,
        controller.window().end(),
        controller.series_len(),
    );

    // TUI main loop
    let mut terminal = ratatui::init();
    loop {
        terminal.draw(|frame| ui::render(frame, &app_state))?;

        // Handle input (non-blocking with timeout)
        if !crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            continue;
        }
        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };
        let Some(cmd) = parse_key(&key.code) else {
            continue;
        };

        let end = controller.window().end();
        let page = controller.window().display_count();
        let event = match cmd {
            ChartCommand::Quit => {
                tracing::info!("User quit");
                break;
            }
            ChartCommand::SelectTimeframe(index) => ChartEvent::TimeframeSelected(index),
            ChartCommand::ScrollLeft => ChartEvent::WindowMoved(end.saturating_sub(1)),
            ChartCommand::ScrollRight => ChartEvent::WindowMoved(end + 1),
            ChartCommand::PageBack => ChartEvent::WindowMoved(end.saturating_sub(page)),
            ChartCommand::PageForward => ChartEvent::WindowMoved(end + page),
            ChartCommand::JumpToStart => ChartEvent::WindowMoved(page),
            ChartCommand::JumpToEnd => ChartEvent::WindowMoved(controller.series_len()),
        };

        match controller.handle(event) {
            Ok(Some(snapshot)) => {
                app_state.publish(
                    snapshot,
                    controller.timeframe(),
                    controller.window().end(),
                    controller.series_len(),
                );
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to update view");
            }
        }
    }

    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Check candlescope.log for details.");
    Ok(())
}
