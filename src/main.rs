//! svn-panel - source-control side panel for Subversion
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use svn_panel::app::App;
use svn_panel::config::{Cli, Config, load_config};
use svn_panel::logging::{LogConfig, init_logging};
use svn_panel::scm::{DEFAULT_DEBOUNCE, SourceControl, WorkingCopyWatcher};
use svn_panel::svn::{CommandRunner, SvnCli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let root = cli
        .path
        .canonicalize()
        .wrap_err_with(|| format!("Cannot open {}", cli.path.display()))?;
    let mut config = load_config(cli.config.as_deref(), &root)?;
    config.apply_cli(&cli);
    init_logging(LogConfig::from_config(&config))?;
    info!(root = %root.display(), "starting svn-panel");

    let app = build_app(root, config)?;

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Wire the svn runner, facade and watcher into an [`App`]
fn build_app(root: std::path::PathBuf, config: Config) -> color_eyre::Result<App<SvnCli>> {
    let runner = SvnCli::new(config.svn_options(root.clone()));
    let command_events = runner.events().subscribe();
    let scm = SourceControl::new(runner, root.clone()).with_order(config.resource_order);

    let watcher = if config.auto_refresh_on_change {
        match WorkingCopyWatcher::new(&root, DEFAULT_DEBOUNCE) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(error = %e, "file watcher unavailable; refresh manually");
                None
            }
        }
    } else {
        None
    };

    let mut app = App::new(scm, config)?.with_command_events(command_events);
    if let Some(watcher) = watcher {
        app = app.with_watcher(watcher);
    }
    Ok(app)
}

/// Run the application's main loop.
fn run<R: CommandRunner>(mut terminal: DefaultTerminal, mut app: App<R>) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout to support idle processing (watcher refresh,
/// spinner, notification expiry).
fn handle_events<R: CommandRunner>(app: &mut App<R>) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.on_idle();
    }
    Ok(())
}
