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

//! Session controller.
//!
//! The [`SessionController`] owns the [`Session`], the URL input value and the
//! status line, and implements every user action: parsing a URL, selecting
//! tracks and downloading the selection.
//!
//! Remote calls are split in two halves. The action validates and dispatches
//! an [`AppTask`] to the task worker, setting `loading`; the worker answers
//! with an event which is handed to the matching `complete_*` method. Every
//! completion clears `loading` before it looks at the outcome, so no path can
//! leave the session stuck.
//!
//! While `loading` is set, new parse and download actions are rejected with
//! [`Dispatch::Busy`] rather than queued.

mod detect;
mod status;

#[cfg(test)]
mod tests;

use std::{fmt::Write, sync::mpsc::Sender, time::Duration};

use anyhow::Result;
use tracing::{debug, error, info, warn};
use tui_input::Input;

pub(crate) use detect::{detect_url, is_playlist};
pub(crate) use status::{StatusKind, StatusLine};

use crate::{
    backend::{DownloadResponse, DownloadResult, ParseResponse, StatusResponse, TransportError},
    config::AppConfig,
    error::ActionError,
    events::AppEvent,
    model::{Track, session::Session},
    scheduler::Scheduler,
    tasks::AppTask,
    view::{self, ViewModel},
};

const MSG_EMPTY_URL: &str = "Please paste a YouTube URL first!";
const MSG_INVALID_URL: &str = "Please enter a valid YouTube URL!";
const MSG_NO_SELECTION: &str = "Please select at least one track!";
const MSG_PARSING: &str = "Parsing tracks...";
const MSG_PARSE_NETWORK: &str = "Network error. Make sure the server is running!";
const MSG_DOWNLOAD_NETWORK: &str = "Network error during download!";
const MSG_UNKNOWN_BACKEND_ERROR: &str = "Unknown error";

const PARSE_ERROR_CONTEXT: &str = "Error";
const DOWNLOAD_ERROR_CONTEXT: &str = "Download error";

/// Whether an action resulted in a request to the task worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Issued,
    /// Another request is still in flight, the action was dropped.
    Busy,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ClipboardOutcome {
    Unchanged,
    Filled,
    AutoParse(Result<Dispatch, ActionError>),
}

/// Per-track counts of a completed download batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DownloadSummary {
    pub(crate) succeeded: usize,
    pub(crate) failed: usize,
}

impl DownloadSummary {
    fn from_results(results: &[DownloadResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    pub(crate) fn message(&self) -> String {
        let mut message = format!("Downloaded {} track(s)!", self.succeeded);
        if self.failed > 0 {
            let _ = write!(message, " ({} failed)", self.failed);
        }
        message.push_str(" Check your music library.");
        message
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ControllerSettings {
    pub(crate) status_dismiss: Duration,
    pub(crate) auto_parse_delay: Duration,
}

impl From<&AppConfig> for ControllerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            status_dismiss: config.status_dismiss(),
            auto_parse_delay: config.auto_parse_delay(),
        }
    }
}

pub(crate) struct SessionController {
    session: Session,
    status: StatusLine,
    input: Input,
    input_generation: u64,
    task_tx: Sender<AppTask>,
    scheduler: Scheduler,
    settings: ControllerSettings,
}

impl SessionController {
    pub(crate) fn new(task_tx: Sender<AppTask>, scheduler: Scheduler, settings: ControllerSettings) -> Self {
        Self {
            session: Session::new(),
            status: StatusLine::new(),
            input: Input::default(),
            input_generation: 0,
            task_tx,
            scheduler,
            settings,
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn status(&self) -> &StatusLine {
        &self.status
    }

    pub(crate) fn input(&self) -> &Input {
        &self.input
    }

    /// Mutable access to the URL input. Callers that change the value must
    /// follow up with [`on_input_changed`](Self::on_input_changed).
    pub(crate) fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub(crate) fn view(&self) -> ViewModel {
        view::render(&self.session, &self.status)
    }

    /// Asks the task worker to read the system clipboard, the answer arrives
    /// as [`AppEvent::ClipboardRead`].
    pub(crate) fn request_clipboard(&self) -> Result<()> {
        self.task_tx.send(AppTask::ReadClipboard)?;
        Ok(())
    }

    pub(crate) fn check_backend(&self) -> Result<()> {
        self.task_tx.send(AppTask::CheckStatus)?;
        Ok(())
    }

    /// Fills the URL input from clipboard text if it holds a new supported
    /// URL, parsing straight away when it is a playlist.
    pub(crate) fn apply_clipboard_text(&mut self, text: Option<String>) -> ClipboardOutcome {
        let Some(text) = text else {
            return ClipboardOutcome::Unchanged;
        };

        let text = text.trim();
        if !detect_url(text) || text == self.input.value() {
            return ClipboardOutcome::Unchanged;
        }

        info!(url = text, "picked up URL from clipboard");
        self.replace_input(text);
        self.session.current_url = text.to_string();

        if is_playlist(text) {
            ClipboardOutcome::AutoParse(self.parse())
        } else {
            ClipboardOutcome::Filled
        }
    }

    /// Reacts to an edit of the URL input. A recognised URL becomes the
    /// current URL, and a playlist URL schedules an automatic parse.
    pub(crate) fn on_input_changed(&mut self) {
        self.input_generation += 1;

        let url = self.input.value().trim();
        if !detect_url(url) {
            return;
        }

        self.session.current_url = url.to_string();

        if is_playlist(url) {
            self.scheduler.schedule(
                self.settings.auto_parse_delay,
                AppEvent::AutoParse(self.input_generation),
            );
        }
    }

    /// Runs a parse scheduled by [`on_input_changed`](Self::on_input_changed)
    /// unless the input was edited again since.
    pub(crate) fn auto_parse(&mut self, generation: u64) -> Option<Result<Dispatch, ActionError>> {
        if generation != self.input_generation {
            return None;
        }

        Some(self.parse())
    }

    /// Validates the URL input and asks the backend to parse it.
    pub(crate) fn parse(&mut self) -> Result<Dispatch, ActionError> {
        if self.session.loading {
            debug!("parse ignored, request already in flight");
            return Ok(Dispatch::Busy);
        }

        let url = self.input.value().trim().to_string();
        if url.is_empty() {
            return Err(self.fail(ActionError::validation(MSG_EMPTY_URL)));
        }
        if !detect_url(&url) {
            return Err(self.fail(ActionError::validation(MSG_INVALID_URL)));
        }

        info!(%url, "parsing");
        self.begin_loading(MSG_PARSING.to_string());
        self.dispatch(AppTask::Parse { url }, MSG_PARSE_NETWORK)
    }

    /// Applies the backend answer to a parse of `url`.
    pub(crate) fn complete_parse(
        &mut self,
        url: String,
        outcome: Result<ParseResponse, TransportError>,
    ) -> Result<&[Track], ActionError> {
        self.session.loading = false;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                error!("parse request failed: {:#}", anyhow::Error::from(e));
                return Err(self.fail(ActionError::network(MSG_PARSE_NETWORK)));
            }
        };

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| MSG_UNKNOWN_BACKEND_ERROR.to_string());
            warn!(%url, "backend could not parse: {message}");
            return Err(self.fail(ActionError::Backend {
                context: PARSE_ERROR_CONTEXT,
                message,
            }));
        }

        self.session
            .replace_tracks(response.tracks.into_iter().map(Track::from).collect());
        self.session.current_url = url;

        let count = self.session.tracks().len();
        info!(count, "parsed tracks");
        self.show_success(format!("Found {count} track(s)!"));

        Ok(self.session.tracks())
    }

    /// Flips the selection of a track. Unknown ids are ignored, the list may
    /// have been replaced since the id was read.
    pub(crate) fn toggle_track(&mut self, id: &str) {
        if !self.session.toggle(id) {
            debug!(id, "toggle ignored, no such track");
        }
    }

    pub(crate) fn select_all(&mut self) {
        self.session.set_all_selected(true);
    }

    pub(crate) fn select_none(&mut self) {
        self.session.set_all_selected(false);
    }

    /// Asks the backend to download every selected track.
    pub(crate) fn download_selected(&mut self) -> Result<Dispatch, ActionError> {
        if self.session.loading {
            debug!("download ignored, request already in flight");
            return Ok(Dispatch::Busy);
        }

        let track_ids = self.session.selected_ids();
        if track_ids.is_empty() {
            return Err(self.fail(ActionError::validation(MSG_NO_SELECTION)));
        }

        info!(count = track_ids.len(), url = %self.session.current_url, "downloading");
        self.begin_loading(format!("Downloading {} track(s)...", track_ids.len()));

        let url = self.session.current_url.clone();
        self.dispatch(AppTask::Download { url, track_ids }, MSG_DOWNLOAD_NETWORK)
    }

    pub(crate) fn complete_download(
        &mut self,
        outcome: Result<DownloadResponse, TransportError>,
    ) -> Result<DownloadSummary, ActionError> {
        self.session.loading = false;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                error!("download request failed: {:#}", anyhow::Error::from(e));
                return Err(self.fail(ActionError::network(MSG_DOWNLOAD_NETWORK)));
            }
        };

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| MSG_UNKNOWN_BACKEND_ERROR.to_string());
            warn!("backend download failed: {message}");
            return Err(self.fail(ActionError::Backend {
                context: DOWNLOAD_ERROR_CONTEXT,
                message,
            }));
        }

        for failure in response.downloads.iter().filter(|d| !d.success) {
            warn!(
                id = failure.id.as_deref().unwrap_or("?"),
                "track failed to download: {}",
                failure.error.as_deref().unwrap_or("no reason given")
            );
        }

        let summary = DownloadSummary::from_results(&response.downloads);
        info!(succeeded = summary.succeeded, failed = summary.failed, "download finished");
        self.show_success(summary.message());

        Ok(summary)
    }

    /// Reports the startup health check. Only a ready backend produces a
    /// message, and only when nothing else is being shown.
    pub(crate) fn apply_backend_status(&mut self, outcome: Result<StatusResponse, TransportError>) {
        match outcome {
            Ok(status) if status.success => {
                info!(download_dir = ?status.download_dir, "backend ready");
                if let Some(message) = status.message {
                    if self.status.current().is_none() {
                        self.show_success(message);
                    }
                }
            }
            Ok(status) => warn!("backend not ready: {:?}", status.message),
            Err(e) => warn!("backend status check failed: {:#}", anyhow::Error::from(e)),
        }
    }

    pub(crate) fn dismiss_status(&mut self, generation: u64) {
        self.status.dismiss(generation);
    }

    fn replace_input(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
        self.input_generation += 1;
    }

    fn begin_loading(&mut self, message: String) {
        self.session.loading = true;
        self.status.show(message, StatusKind::Loading);
    }

    fn dispatch(&mut self, task: AppTask, network_message: &str) -> Result<Dispatch, ActionError> {
        match self.task_tx.send(task) {
            Ok(()) => Ok(Dispatch::Issued),
            Err(e) => {
                error!("task worker unavailable: {e}");
                self.session.loading = false;
                Err(self.fail(ActionError::network(network_message)))
            }
        }
    }

    fn fail(&mut self, err: ActionError) -> ActionError {
        self.status.show(err.to_string(), StatusKind::Error);
        err
    }

    fn show_success(&mut self, message: String) {
        let generation = self.status.show(message, StatusKind::Success);
        self.scheduler
            .schedule(self.settings.status_dismiss, AppEvent::DismissStatus(generation));
    }
}
