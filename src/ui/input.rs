//! Keyboard routing: global hotkeys first, then the active step's keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::session::Step;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match app.session().step {
        Step::Upload { .. } => handle_upload_key(app, key),
        Step::Skills { .. } => handle_skills_key(app, key),
        Step::Match { .. } => {}
    }
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.start_upload();
        return;
    }
    match key.code {
        KeyCode::Enter => app.select_file(),
        KeyCode::Backspace => app.backspace_path(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_path(ch),
        _ => {}
    }
}

fn handle_skills_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'f') {
        app.submit_match();
        return;
    }
    // The editor is inert while the match request is in flight.
    if app.session().loading {
        return;
    }
    match key.code {
        KeyCode::Enter => app.newline_job(),
        KeyCode::Backspace => app.backspace_job(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_job(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
