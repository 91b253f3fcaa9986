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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! the backend HTTP calls and clipboard reads, from the main UI thread. It
//! provides a dedicated worker loop that translates [`AppTask`] requests into
//! backend or clipboard operations and broadcasts the results back to the
//! application via [`AppEvent`]s.
//!
//! There is exactly one worker, so tasks run strictly one after another.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, error};

use crate::{
    backend::{Backend, http::HttpBackend},
    clipboard::{ClipboardSource, SystemClipboard},
    config::AppConfig,
    events::AppEvent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    ReadClipboard,

    Parse { url: String },
    Download { url: String, track_ids: Vec<String> },

    CheckStatus,
}

/// Spawns a background thread to process application tasks.
///
/// The HTTP backend is created up front so that a bad backend address is
/// reported before the terminal is taken over. The clipboard is opened on the
/// worker thread itself.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
///
/// # Errors
///
/// Returns an error if the backend cannot be configured.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let backend = HttpBackend::new(&config.backend_url, config.request_timeout())?;

    thread::spawn(move || {
        let mut clipboard = SystemClipboard::new();
        run_task_worker(&backend, &mut clipboard, task_rx, &event_tx);
        debug!("task worker stopped");
    });

    Ok(())
}

/// Processes tasks until the task channel closes or the application stops
/// listening for results.
pub(crate) fn run_task_worker(
    backend: &dyn Backend,
    clipboard: &mut dyn ClipboardSource,
    task_rx: Receiver<AppTask>,
    event_tx: &Sender<AppEvent>,
) {
    while let Ok(task) = task_rx.recv() {
        let mut ctx = TaskContext {
            backend,
            clipboard: &mut *clipboard,
            event_tx,
        };

        if let Err(e) = handle_task(task, &mut ctx) {
            error!("task worker shutting down: {:#}", e);
            break;
        }
    }
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    backend: &'a dyn Backend,
    clipboard: &'a mut dyn ClipboardSource,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
///
/// Remote failures are part of the result sent back to the application; an
/// error here only means the result could not be delivered.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::ReadClipboard => read_clipboard(ctx),

        AppTask::Parse { url } => parse(ctx, url),
        AppTask::Download { url, track_ids } => download(ctx, url, track_ids),

        AppTask::CheckStatus => check_status(ctx),
    }
}
