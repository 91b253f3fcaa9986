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

//! Toolkit independent view state.
//!
//! [`render`] derives everything the screen shows from the session and the
//! status line. Nothing here is cached between frames, so the download button
//! always reflects the current selection.

use crate::{
    controller::{StatusKind, StatusLine},
    model::session::Session,
    util::format::{escape_html, sanitize_text},
};

const DOWNLOAD_IDLE_LABEL: &str = "Download Selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewModel {
    pub(crate) rows: Vec<TrackRow>,
    pub(crate) empty_state: bool,
    pub(crate) selected_count: usize,
    pub(crate) download: ButtonView,
    pub(crate) parse_enabled: bool,
    pub(crate) loading: bool,
    pub(crate) status: Option<StatusView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackRow {
    pub(crate) id: String,
    /// Title with control characters removed, safe to print to a terminal.
    pub(crate) title: String,
    /// Title escaped for inclusion in HTML markup. The terminal renderer
    /// prints `title`; this is part of the row contract for front ends that
    /// emit markup, such as a web view over the same session.
    pub(crate) title_html: String,
    pub(crate) duration: String,
    pub(crate) checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ButtonView {
    pub(crate) enabled: bool,
    pub(crate) label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusView {
    pub(crate) message: String,
    pub(crate) kind: StatusKind,
}

pub(crate) fn render(session: &Session, status: &StatusLine) -> ViewModel {
    let rows: Vec<TrackRow> = session
        .tracks()
        .iter()
        .map(|track| TrackRow {
            id: track.id.clone(),
            title: sanitize_text(&track.title),
            title_html: escape_html(&track.title),
            duration: sanitize_text(&track.duration),
            checked: track.selected,
        })
        .collect();

    let selected_count = session.selected_count();

    let download = ButtonView {
        enabled: selected_count > 0 && !session.loading,
        label: download_label(selected_count),
    };

    let status = status.current().map(|(message, kind)| StatusView {
        message: message.to_string(),
        kind,
    });

    ViewModel {
        empty_state: rows.is_empty(),
        rows,
        selected_count,
        download,
        parse_enabled: !session.loading,
        loading: session.loading,
        status,
    }
}

pub(crate) fn download_label(selected: usize) -> String {
    match selected {
        0 => DOWNLOAD_IDLE_LABEL.to_string(),
        1 => "Download 1 Track".to_string(),
        n => format!("Download {n} Tracks"),
    }
}
