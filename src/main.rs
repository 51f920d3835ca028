//! postdesk - terminal moderation console
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use postdesk::api::ApiClient;
use postdesk::app::{App, AppOptions};
use postdesk::config::Config;
use postdesk::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let log_warning = logging::init(&config.log_file).err();
    info!(api_url = %config.api_url, locale = ?config.locale, "starting postdesk");

    let client = ApiClient::new(&config.api_url, config.token.clone(), config.timeout)?;

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |_| ratatui::restore());

    let mut app = App::new(Box::new(client), AppOptions::from(&config));
    if let Some(e) = log_warning {
        app.notify_warning(e.to_string());
    }
    run(terminal, &mut app)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(app)?;
    }
    info!("postdesk stopped");
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear while idle.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
