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

//! # Pan-Pup TUI.
//!
//! A terminal client for a local playlist download service.
//!
//! The user pastes a YouTube video or playlist URL, the backend lists the
//! tracks it contains, the user picks some of them and the backend downloads
//! the picked tracks into the music library.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the session and
//!   renders the UI.
//! * A **Task Worker** performs the blocking backend calls and clipboard reads
//!   and reports the results as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the task worker is handled via `std::sync::mpsc`
//! channels.

mod backend;
mod clipboard;
mod components;
mod config;
mod controller;
mod error;
mod events;
mod logging;
mod model;
mod render;
mod scheduler;
mod tasks;
mod theme;
mod util;
mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    components::TrackTable,
    config::AppConfig,
    controller::{ControllerSettings, SessionController},
    events::{AppEvent, Focus, process_events},
    scheduler::Scheduler,
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) focus: Focus,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) controller: SessionController,
    pub(crate) track_table: TrackTable,

    /// Advanced by the tick thread, drives the loading spinner.
    pub(crate) tick: u64,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let controller = SessionController::new(
            task_tx,
            Scheduler::new(event_tx.clone()),
            ControllerSettings::from(&config),
        );

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::UrlInput,
            event_tx,
            event_rx,
            controller,
            track_table: TrackTable::new(),
            tick: 0,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init_logging(&config.resolved_log_dir()).context("Failed to initialise logging")?;

    info!(backend = %config.backend_url, "starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone())
        .context("Failed to initialise backend client")?;

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("stopped");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Asks the terminal to report pastes and focus changes.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableFocusChange)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableFocusChange, DisableBracketedPaste, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// Before handing control to [`process_events`] it asks the backend for its
/// status and schedules the first clipboard check.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Ok(event::Event::Paste(text)) => Some(AppEvent::Paste(text)),
                Ok(event::Event::FocusGained) => Some(AppEvent::FocusGained),
                _ => None,
            };

            if let Some(event) = forwarded {
                if tx_input.send(event).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    app.controller.check_backend()?;

    Scheduler::new(app.event_tx.clone()).schedule(app.config.clipboard_delay(), AppEvent::CheckClipboard);

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
