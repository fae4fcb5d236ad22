mod app;
mod cli;
mod config;
mod consent;
mod content;
mod disclosure;
mod launch;
mod model;
mod signals;
mod ui;

use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use crate::{
    app::{App, Collaborators, KeyOutcome},
    cli::Cli,
    config::Settings,
    consent::{CommandWidget, ConsentWidget},
    disclosure::HttpDisclosureFetcher,
    model::SectionId,
    signals::{KeyValueFile, resolve_global_privacy_control},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config::data_dir().join("trusthub.log"));
    init_logging(&log_path, cli.log_level)?;

    let settings = Settings::load(cli.config.as_deref())?;
    let initial_section = match &cli.section {
        Some(id) => id.parse::<SectionId>()?,
        None => settings.initial_section()?,
    };
    let global_privacy_control =
        resolve_global_privacy_control(cli.global_privacy_control(), settings.global_privacy_control);

    let fetcher = HttpDisclosureFetcher::new(
        settings.api_base.clone(),
        Duration::from_secs(settings.request_timeout_secs),
    )
    .context("failed to build HTTP client")?;
    let identifiers = KeyValueFile::new(settings.identifier_store_path());
    log::info!(
        "starting on section {initial_section}; identifier store {}",
        identifiers.path().display()
    );
    let consent_widget = CommandWidget::from_settings(settings.consent_widget.as_ref())
        .map(|widget| Box::new(widget) as Box<dyn ConsentWidget>);

    let mut app = App::new(
        &settings,
        initial_section,
        global_privacy_control,
        Collaborators {
            disclosures: Arc::new(fetcher),
            identifiers: Box::new(identifiers),
            consent_widget,
        },
    );
    if let Some(value) = cli.show_uuid {
        app.show_uuid_modal(value);
    }

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == KeyOutcome::Quit
        {
            log::info!("quit requested");
            return Ok(());
        }
    }
}

// The terminal belongs to the UI, so log lines go to a file.
fn init_logging(path: &Path, level: log::LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
