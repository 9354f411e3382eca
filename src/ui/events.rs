//! Event pump for the UI loop.
//!
//! A dedicated thread polls crossterm for terminal input and emits ticks;
//! the API worker pushes its completions through the same channel. The UI
//! loop consumes everything with `recv_timeout`.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::error::ApiError;
use crate::api::types::{MatchResponse, SkillsResponse, UploadResponse};

/// Completion of a service call, reported by the API worker.
#[derive(Debug)]
pub enum ApiOutcome {
    Upload(Result<UploadResponse, ApiError>),
    Skills(Result<SkillsResponse, ApiError>),
    Match(Result<MatchResponse, ApiError>),
}

pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    Api(ApiOutcome),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Input(key)),
                            Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(_) => break,
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
