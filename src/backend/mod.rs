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

//! Remote parse and download backend.
//!
//! The backend is an external service that turns a URL into a track list and
//! downloads tracks by id. This module defines the JSON payloads exchanged
//! with it and the [`Backend`] trait the task worker calls, so that the
//! transport can be swapped out (see [`http::HttpBackend`]).
//!
//! Every call answers with a `success` flag. A response with `success =
//! false` is a completed call and is returned as `Ok`; only failures to reach
//! the backend or to read its answer are [`TransportError`]s.

pub(crate) mod http;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub(crate) struct ParseRequest<'a> {
    pub(crate) url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ParseResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) tracks: Vec<RemoteTrack>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RemoteTrack {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) duration: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequest<'a> {
    pub(crate) url: &'a str,
    pub(crate) track_ids: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct DownloadResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) downloads: Vec<DownloadResult>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

/// Outcome of a single track within a download batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct DownloadResult {
    #[serde(default)]
    pub(crate) id: Option<String>,
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct StatusResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) download_dir: Option<String>,
}

#[derive(Debug, Error)]
pub(crate) enum TransportError {
    #[error("request to {endpoint} failed")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("unreadable response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) trait Backend {
    fn parse(&self, url: &str) -> Result<ParseResponse, TransportError>;

    fn download(&self, url: &str, track_ids: &[String]) -> Result<DownloadResponse, TransportError>;

    /// Health check, used once at startup.
    fn status(&self) -> Result<StatusResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_ignores_extra_track_fields() {
        let body = r#"{
            "success": true,
            "tracks": [
                {"id": "a", "title": "Song A", "duration": "3:21", "selected": true},
                {"id": "b", "title": "Song B"}
            ]
        }"#;

        let response: ParseResponse = serde_json::from_str(body).unwrap();

        assert!(response.success);
        assert_eq!(response.tracks.len(), 2);
        assert_eq!(response.tracks[0].duration, "3:21");
        assert_eq!(response.tracks[1].duration, "");
        assert_eq!(response.error, None);
    }

    #[test]
    fn failed_parse_response_carries_error() {
        let body = r#"{"success": false, "error": "Not a valid YouTube URL"}"#;
        let response: ParseResponse = serde_json::from_str(body).unwrap();

        assert!(!response.success);
        assert!(response.tracks.is_empty());
        assert_eq!(response.error.as_deref(), Some("Not a valid YouTube URL"));
    }

    #[test]
    fn download_response_accepts_null_errors() {
        let body = r#"{
            "success": true,
            "downloads": [
                {"id": "a", "success": true, "error": null},
                {"success": false}
            ]
        }"#;

        let response: DownloadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.downloads.len(), 2);
        assert_eq!(response.downloads[0].id.as_deref(), Some("a"));
        assert!(!response.downloads[1].success);
    }

    #[test]
    fn download_request_uses_backend_field_names() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let request = DownloadRequest { url: "https://youtube.com/playlist?list=x", track_ids: &ids };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["url"], "https://youtube.com/playlist?list=x");
        assert_eq!(json["track_ids"], serde_json::json!(["a", "b"]));
    }
}
