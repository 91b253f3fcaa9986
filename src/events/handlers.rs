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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tracing::debug;
use tui_input::{InputRequest, backend::crossterm::EventHandler};

use crate::{
    App,
    backend::{DownloadResponse, ParseResponse, TransportError},
    components::TrackTableAction,
    controller::{ClipboardOutcome, Dispatch},
    error::ActionError,
    events::Focus,
};

pub(super) fn process_input_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.focus = Focus::TrackList,

        KeyCode::Enter => log_dispatch("parse", app.controller.parse()),

        _ => {
            // Delegate all other key events to the managed input component.
            let event = Event::Key(key);
            if let Some(changed) = app.controller.input_mut().handle_event(&event) {
                if changed.value {
                    app.controller.on_input_changed();
                }
            }
        }
    }

    Ok(())
}

pub(super) fn handle_paste(app: &mut App, text: &str) {
    let input = app.controller.input_mut();
    for c in text.chars().filter(|c| !c.is_control()) {
        input.handle(InputRequest::InsertChar(c));
    }

    app.focus = Focus::UrlInput;
    app.controller.on_input_changed();
}

pub(super) fn handle_focus_gained(app: &mut App) -> Result<()> {
    if app.config.clipboard_on_focus {
        app.controller.request_clipboard()?;
    }

    Ok(())
}

pub(super) fn handle_clipboard_read(app: &mut App, text: Option<String>) {
    match app.controller.apply_clipboard_text(text) {
        ClipboardOutcome::Unchanged => {}
        ClipboardOutcome::Filled => app.focus = Focus::UrlInput,
        ClipboardOutcome::AutoParse(result) => log_dispatch("clipboard parse", result),
    }
}

pub(super) fn handle_auto_parse(app: &mut App, generation: u64) {
    if let Some(result) = app.controller.auto_parse(generation) {
        log_dispatch("auto parse", result);
    }
}

pub(super) fn handle_parse_completed(
    app: &mut App,
    url: String,
    outcome: Result<ParseResponse, TransportError>,
) {
    match app.controller.complete_parse(url, outcome) {
        Ok(tracks) => {
            let count = tracks.len();
            app.track_table.reset(count);
            if count > 0 {
                app.focus = Focus::TrackList;
            }
        }
        Err(e) => debug!("parse failed: {e}"),
    }
}

pub(super) fn handle_download_completed(
    app: &mut App,
    outcome: Result<DownloadResponse, TransportError>,
) {
    if let Err(e) = app.controller.complete_download(outcome) {
        debug!("download failed: {e}");
    }
}

pub(super) fn handle_track_table_action(app: &mut App, action: TrackTableAction) {
    match action {
        TrackTableAction::Toggle(index) => {
            let id = app
                .controller
                .session()
                .tracks()
                .get(index)
                .map(|t| t.id.clone());
            if let Some(id) = id {
                app.controller.toggle_track(&id);
            }
        }
        TrackTableAction::SelectAll => app.controller.select_all(),
        TrackTableAction::SelectNone => app.controller.select_none(),
        TrackTableAction::Download => log_dispatch("download", app.controller.download_selected()),
    }
}

// Errors have already been put on the status line by the controller.
fn log_dispatch(action: &str, result: Result<Dispatch, ActionError>) {
    match result {
        Ok(Dispatch::Issued) => debug!("{action} dispatched"),
        Ok(Dispatch::Busy) => debug!("{action} skipped, busy"),
        Err(e) => debug!("{action} rejected: {e}"),
    }
}
