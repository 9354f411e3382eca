//! The UI loop: draw, consume one event, repeat.

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tracing::info;

use crate::api::client::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = ApiClient::new(&config.api)?;
    info!(base_url = client.base_url(), "starting resumatch");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new();
    app.set_api_sender(worker::spawn(runtime.handle(), client, events.sender()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Api(outcome)) => app.on_api_outcome(outcome),
            // Redraw on the next loop pass; ratatui re-reads the size.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
