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

//! Domain models and core data structures.
//!
//! This module defines the tracks parsed from a playlist URL and the session
//! state that holds them between the parse and download round-trips.

pub(crate) mod session;

use crate::backend::RemoteTrack;

const UNKNOWN_DURATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) duration: String,
    pub(crate) selected: bool,
}

impl Track {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: duration.into(),
            selected: false,
        }
    }
}

impl From<RemoteTrack> for Track {
    // Freshly parsed tracks always start unselected.
    fn from(remote: RemoteTrack) -> Self {
        let duration = match remote.duration.trim() {
            "" | "NA" => UNKNOWN_DURATION.to_string(),
            d => d.to_string(),
        };

        Self::new(remote.id, remote.title, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(duration: &str) -> RemoteTrack {
        RemoteTrack {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Song A".to_string(),
            duration: duration.to_string(),
        }
    }

    #[test]
    fn remote_tracks_start_unselected() {
        let track = Track::from(remote("3:21"));
        assert_eq!(track.id, "dQw4w9WgXcQ");
        assert_eq!(track.duration, "3:21");
        assert!(!track.selected);
    }

    #[test]
    fn missing_duration_is_shown_as_unknown() {
        assert_eq!(Track::from(remote("")).duration, "Unknown");
        assert_eq!(Track::from(remote("NA")).duration, "Unknown");
    }
}
