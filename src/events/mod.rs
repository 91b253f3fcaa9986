// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard, paste, focus), task worker
//! results (backend calls, clipboard reads), scheduled events and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function hands each event to the
//!    session controller or the focused component.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! All state is mutated from this one thread.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    backend::{DownloadResponse, ParseResponse, StatusResponse, TransportError},
    render::draw,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    UrlInput,
    TrackList,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    FocusGained,

    /// Time to look at the clipboard, on startup and on request.
    CheckClipboard,
    ClipboardRead(Option<String>),

    ParseCompleted {
        url: String,
        outcome: Result<ParseResponse, TransportError>,
    },
    DownloadCompleted(Result<DownloadResponse, TransportError>),
    BackendStatus(Result<StatusResponse, TransportError>),

    DismissStatus(u64),
    AutoParse(u64),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Paste(text) => handle_paste(app, &text),
        AppEvent::FocusGained => handle_focus_gained(app)?,
        AppEvent::CheckClipboard => app.controller.request_clipboard()?,
        AppEvent::ClipboardRead(text) => handle_clipboard_read(app, text),
        AppEvent::ParseCompleted { url, outcome } => handle_parse_completed(app, url, outcome),
        AppEvent::DownloadCompleted(outcome) => handle_download_completed(app, outcome),
        AppEvent::BackendStatus(outcome) => app.controller.apply_backend_status(outcome),
        AppEvent::DismissStatus(generation) => app.controller.dismiss_status(generation),
        AppEvent::AutoParse(generation) => handle_auto_parse(app, generation),
        AppEvent::Tick => app.tick = app.tick.wrapping_add(1),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into controller actions. It handles:
///
/// * **Application Control**: Quitting and switching focus.
/// * **URL Entry**: Editing the URL and submitting it for parsing.
/// * **Track Selection**: Moving through the track list and toggling tracks.
/// * **Downloading**: Sending the selection to the backend.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop or a task
/// cannot be sent to the task worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
            app.focus = match app.focus {
                Focus::UrlInput => Focus::TrackList,
                Focus::TrackList => Focus::UrlInput,
            };
            return Ok(());
        }

        _ => {}
    }

    match app.focus {
        Focus::UrlInput => process_input_key_event(app, key),
        Focus::TrackList => process_list_key_event(app, key),
    }
}

fn process_list_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('i'), _) | (KeyCode::Char('/'), _) => app.focus = Focus::UrlInput,

        (KeyCode::Char('p'), _) => app.event_tx.send(AppEvent::CheckClipboard)?,

        _ => {
            let track_count = app.controller.session().tracks().len();
            if let Some(action) = app.track_table.process_event(&key, track_count) {
                handle_track_table_action(app, action);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        backend::{DownloadResult, RemoteTrack},
        config::AppConfig,
        controller::StatusKind,
        tasks::AppTask,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn parsed(app: &mut App, ids: &[&str]) {
        let tracks = ids
            .iter()
            .map(|id| RemoteTrack {
                id: id.to_string(),
                title: format!("Song {id}"),
                duration: "3:00".to_string(),
            })
            .collect();

        handle_event(
            app,
            AppEvent::ParseCompleted {
                url: "https://youtube.com/playlist?list=PL1".to_string(),
                outcome: Ok(ParseResponse {
                    success: true,
                    tracks,
                    error: None,
                }),
            },
        )
        .unwrap();
    }

    #[test]
    fn enter_in_input_parses_typed_url() {
        let (mut app, task_rx) = app();

        type_text(&mut app, "https://youtu.be/abc");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::Parse { url: "https://youtu.be/abc".to_string() }
        );
        assert!(app.controller.session().loading);
    }

    #[test]
    fn keys_in_list_toggle_and_download() {
        let (mut app, task_rx) = app();
        app.focus = Focus::TrackList;
        parsed(&mut app, &["a", "b"]);

        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.controller.session().selected_ids(), ["a"]);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.controller.session().selected_count(), 2);

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::Download {
                url: "https://youtube.com/playlist?list=PL1".to_string(),
                track_ids: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn tab_switches_focus_so_letters_are_not_typed() {
        let (mut app, _task_rx) = app();

        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::TrackList);

        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.controller.input().value(), "");

        handle_event(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.focus, Focus::UrlInput);
    }

    #[test]
    fn paste_fills_input() {
        let (mut app, _task_rx) = app();

        handle_event(&mut app, AppEvent::Paste("https://youtu.be/abc\n".to_string())).unwrap();

        assert_eq!(app.controller.input().value(), "https://youtu.be/abc");
        assert_eq!(app.controller.session().current_url, "https://youtu.be/abc");
    }

    #[test]
    fn download_results_reach_status_line() {
        let (mut app, _task_rx) = app();
        app.focus = Focus::TrackList;
        parsed(&mut app, &["a"]);
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        handle_event(
            &mut app,
            AppEvent::DownloadCompleted(Ok(DownloadResponse {
                success: true,
                downloads: vec![DownloadResult {
                    id: Some("a".to_string()),
                    success: true,
                    error: None,
                }],
                error: None,
            })),
        )
        .unwrap();

        assert!(!app.controller.session().loading);
        assert_eq!(
            app.controller.status().current(),
            Some(("Downloaded 1 track(s)! Check your music library.", StatusKind::Success))
        );
    }
}
