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

use std::{
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use super::*;
use crate::backend::RemoteTrack;

const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PL123";
const VIDEO_URL: &str = "https://youtu.be/abc";

struct Harness {
    controller: SessionController,
    task_rx: Receiver<AppTask>,
    event_rx: Receiver<AppEvent>,
}

fn harness() -> Harness {
    let (task_tx, task_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    let settings = ControllerSettings {
        status_dismiss: Duration::from_millis(10),
        auto_parse_delay: Duration::from_millis(10),
    };

    Harness {
        controller: SessionController::new(task_tx, Scheduler::new(event_tx), settings),
        task_rx,
        event_rx,
    }
}

fn type_url(controller: &mut SessionController, url: &str) {
    *controller.input_mut() = Input::new(url.to_string());
    controller.on_input_changed();
}

fn remote(id: &str) -> RemoteTrack {
    RemoteTrack {
        id: id.to_string(),
        title: format!("Track {id}"),
        duration: "3:00".to_string(),
    }
}

fn parse_ok(ids: &[&str]) -> Result<ParseResponse, TransportError> {
    Ok(ParseResponse {
        success: true,
        tracks: ids.iter().map(|id| remote(id)).collect(),
        error: None,
    })
}

fn loaded(ids: &[&str]) -> Harness {
    let mut h = harness();
    type_url(&mut h.controller, VIDEO_URL);
    h.controller.parse().unwrap();
    h.task_rx.try_recv().unwrap();
    h.controller.complete_parse(VIDEO_URL.to_string(), parse_ok(ids)).unwrap();
    h
}

fn result(id: &str, success: bool) -> DownloadResult {
    DownloadResult {
        id: Some(id.to_string()),
        success,
        error: (!success).then(|| "unavailable".to_string()),
    }
}

fn selection(controller: &SessionController) -> Vec<bool> {
    controller.session().tracks().iter().map(|t| t.selected).collect()
}

#[test]
fn clipboard_playlist_parses_once() {
    let mut h = harness();

    let outcome = h.controller.apply_clipboard_text(Some(format!("  {PLAYLIST_URL}\n")));

    assert_eq!(outcome, ClipboardOutcome::AutoParse(Ok(Dispatch::Issued)));
    assert_eq!(h.controller.input().value(), PLAYLIST_URL);
    assert_eq!(h.task_rx.try_recv().unwrap(), AppTask::Parse { url: PLAYLIST_URL.to_string() });
    assert!(h.task_rx.try_recv().is_err());
    assert!(h.controller.session().loading);
}

#[test]
fn clipboard_video_fills_without_parsing() {
    let mut h = harness();

    assert_eq!(h.controller.apply_clipboard_text(Some(VIDEO_URL.to_string())), ClipboardOutcome::Filled);
    assert!(h.task_rx.try_recv().is_err());
    assert_eq!(h.controller.session().current_url, VIDEO_URL);
}

#[test]
fn clipboard_ignores_unrelated_or_repeated_text() {
    let mut h = harness();

    assert_eq!(h.controller.apply_clipboard_text(None), ClipboardOutcome::Unchanged);
    assert_eq!(
        h.controller.apply_clipboard_text(Some("https://example.com".to_string())),
        ClipboardOutcome::Unchanged
    );

    h.controller.apply_clipboard_text(Some(VIDEO_URL.to_string()));
    assert_eq!(h.controller.apply_clipboard_text(Some(VIDEO_URL.to_string())), ClipboardOutcome::Unchanged);
}

#[test]
fn parse_success_lists_unselected_tracks() {
    let h = loaded(&["a"]);

    let view = h.controller.view();
    assert_eq!(view.rows.len(), 1);
    assert!(!view.rows[0].checked);
    assert!(!view.download.enabled);
    assert!(!h.controller.session().loading);
    assert_eq!(h.controller.status().current(), Some(("Found 1 track(s)!", StatusKind::Success)));
}

#[test]
fn toggling_updates_download_label() {
    let mut h = loaded(&["a"]);

    h.controller.toggle_track("a");

    let view = h.controller.view();
    assert_eq!(view.download.label, "Download 1 Track");
    assert!(view.download.enabled);
}

#[test]
fn toggle_twice_restores_selection() {
    let mut h = loaded(&["a", "b"]);
    h.controller.toggle_track("b");
    let before = selection(&h.controller);

    h.controller.toggle_track("a");
    h.controller.toggle_track("a");

    assert_eq!(selection(&h.controller), before);
}

#[test]
fn select_all_and_none_are_idempotent() {
    let mut h = loaded(&["a", "b", "c"]);

    h.controller.select_all();
    h.controller.select_all();
    assert_eq!(selection(&h.controller), [true, true, true]);

    h.controller.select_none();
    h.controller.select_none();
    assert_eq!(selection(&h.controller), [false, false, false]);
}

#[test]
fn download_reports_partial_failure() {
    let mut h = loaded(&["a", "b"]);
    h.controller.select_all();

    assert_eq!(h.controller.download_selected(), Ok(Dispatch::Issued));
    assert_eq!(
        h.task_rx.try_recv().unwrap(),
        AppTask::Download {
            url: VIDEO_URL.to_string(),
            track_ids: vec!["a".to_string(), "b".to_string()],
        }
    );

    let summary = h
        .controller
        .complete_download(Ok(DownloadResponse {
            success: true,
            downloads: vec![result("a", true), result("b", false)],
            error: None,
        }))
        .unwrap();

    assert_eq!(summary, DownloadSummary { succeeded: 1, failed: 1 });
    assert!(!h.controller.session().loading);
    assert_eq!(
        h.controller.status().current(),
        Some(("Downloaded 1 track(s)! (1 failed) Check your music library.", StatusKind::Success))
    );
}

#[test]
fn download_without_selection_is_rejected() {
    let mut h = loaded(&["a"]);

    let err = h.controller.download_selected().unwrap_err();

    assert_eq!(err, ActionError::validation(MSG_NO_SELECTION));
    assert!(h.task_rx.try_recv().is_err());
    assert!(!h.controller.session().loading);
}

#[test]
fn empty_input_is_rejected_without_request() {
    let mut h = harness();

    let err = h.controller.parse().unwrap_err();

    assert_eq!(err, ActionError::validation(MSG_EMPTY_URL));
    assert!(h.task_rx.try_recv().is_err());
    assert!(!h.controller.session().loading);
    assert_eq!(h.controller.status().current(), Some((MSG_EMPTY_URL, StatusKind::Error)));
}

#[test]
fn unsupported_url_is_rejected() {
    let mut h = harness();
    type_url(&mut h.controller, "https://vimeo.com/123");

    assert_eq!(h.controller.parse(), Err(ActionError::validation(MSG_INVALID_URL)));
    assert!(h.task_rx.try_recv().is_err());
}

#[test]
fn transport_failure_keeps_previous_tracks() {
    let mut h = loaded(&["a", "b"]);
    type_url(&mut h.controller, "https://youtu.be/other");
    h.controller.parse().unwrap();

    let err = h
        .controller
        .complete_parse(
            "https://youtu.be/other".to_string(),
            Err(TransportError::Status { endpoint: "parse".to_string(), status: 502 }),
        )
        .unwrap_err();

    assert_eq!(err, ActionError::network(MSG_PARSE_NETWORK));
    assert!(!h.controller.session().loading);
    assert_eq!(h.controller.session().tracks().len(), 2);
    assert_eq!(h.controller.status().current(), Some((MSG_PARSE_NETWORK, StatusKind::Error)));
}

#[test]
fn backend_error_is_shown_with_context() {
    let mut h = harness();
    type_url(&mut h.controller, VIDEO_URL);
    h.controller.parse().unwrap();

    let err = h
        .controller
        .complete_parse(
            VIDEO_URL.to_string(),
            Ok(ParseResponse {
                success: false,
                tracks: Vec::new(),
                error: Some("Video unavailable".to_string()),
            }),
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "Error: Video unavailable");
    assert_eq!(h.controller.status().current(), Some(("Error: Video unavailable", StatusKind::Error)));
}

#[test]
fn backend_download_error_without_message() {
    let mut h = loaded(&["a"]);
    h.controller.toggle_track("a");
    h.controller.download_selected().unwrap();

    let err = h
        .controller
        .complete_download(Ok(DownloadResponse {
            success: false,
            downloads: Vec::new(),
            error: None,
        }))
        .unwrap_err();

    assert_eq!(err.to_string(), "Download error: Unknown error");
}

#[test]
fn requests_are_not_stacked_while_loading() {
    let mut h = loaded(&["a"]);
    h.controller.toggle_track("a");
    h.controller.download_selected().unwrap();
    h.task_rx.try_recv().unwrap();

    assert_eq!(h.controller.download_selected(), Ok(Dispatch::Busy));
    assert_eq!(h.controller.parse(), Ok(Dispatch::Busy));
    assert!(h.task_rx.try_recv().is_err());
    assert!(!h.controller.view().download.enabled);
}

#[test]
fn typed_playlist_parses_after_pause() {
    let mut h = harness();
    type_url(&mut h.controller, PLAYLIST_URL);

    let AppEvent::AutoParse(generation) = h.event_rx.recv_timeout(Duration::from_secs(5)).unwrap() else {
        panic!("expected auto parse");
    };

    assert_eq!(h.controller.auto_parse(generation), Some(Ok(Dispatch::Issued)));
    assert_eq!(h.task_rx.try_recv().unwrap(), AppTask::Parse { url: PLAYLIST_URL.to_string() });
}

#[test]
fn stale_auto_parse_is_ignored() {
    let mut h = harness();
    type_url(&mut h.controller, PLAYLIST_URL);
    let AppEvent::AutoParse(stale) = h.event_rx.recv_timeout(Duration::from_secs(5)).unwrap() else {
        panic!("expected auto parse");
    };

    type_url(&mut h.controller, &format!("{PLAYLIST_URL}4"));

    assert_eq!(h.controller.auto_parse(stale), None);
    assert!(h.task_rx.try_recv().is_err());
}

#[test]
fn success_message_is_dismissed_later() {
    let mut h = loaded(&["a"]);

    let AppEvent::DismissStatus(generation) = h.event_rx.recv_timeout(Duration::from_secs(5)).unwrap() else {
        panic!("expected dismiss");
    };
    h.controller.dismiss_status(generation);

    assert_eq!(h.controller.status().current(), None);
}

#[test]
fn ready_backend_greets_only_on_quiet_status_line() {
    let mut h = harness();
    let ready = || {
        Ok(StatusResponse {
            success: true,
            message: Some("Server ready".to_string()),
            download_dir: Some("/music".to_string()),
        })
    };

    h.controller.apply_backend_status(ready());
    assert_eq!(h.controller.status().current(), Some(("Server ready", StatusKind::Success)));

    h.controller.parse().unwrap_err();
    h.controller.apply_backend_status(ready());
    assert_eq!(h.controller.status().current(), Some((MSG_EMPTY_URL, StatusKind::Error)));
}

#[test]
fn unreachable_backend_is_only_logged() {
    let mut h = harness();

    h.controller
        .apply_backend_status(Err(TransportError::Status { endpoint: "status".to_string(), status: 503 }));

    assert_eq!(h.controller.status().current(), None);
}

#[test]
fn download_transport_failure_clears_loading() {
    let mut h = loaded(&["a", "b"]);
    h.controller.toggle_track("b");
    let before = selection(&h.controller);
    h.controller.download_selected().unwrap();
    assert!(h.controller.session().loading);

    let err = h
        .controller
        .complete_download(Err(TransportError::Status { endpoint: "download".to_string(), status: 502 }))
        .unwrap_err();

    assert_eq!(err, ActionError::network(MSG_DOWNLOAD_NETWORK));
    assert!(!h.controller.session().loading);
    assert_eq!(h.controller.status().current(), Some(("Network error during download!", StatusKind::Error)));
    assert_eq!(selection(&h.controller), before);
}

#[test]
fn found_count_excludes_duplicate_ids() {
    let h = loaded(&["a", "b", "a"]);

    assert_eq!(h.controller.session().tracks().len(), 2);
    assert_eq!(h.controller.status().current(), Some(("Found 2 track(s)!", StatusKind::Success)));
}
