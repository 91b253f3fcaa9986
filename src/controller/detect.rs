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

//! URL recognition.
//!
//! Both checks are plain substring tests, deliberately loose: the backend does
//! the real validation.

const HOST_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

const PLAYLIST_MARKERS: [&str; 2] = ["playlist", "list="];

/// Returns `true` if `candidate` mentions a supported platform host.
pub(crate) fn detect_url(candidate: &str) -> bool {
    HOST_MARKERS.iter().any(|marker| candidate.contains(marker))
}

/// Returns `true` if `url` refers to a playlist rather than a single video.
pub(crate) fn is_playlist(url: &str) -> bool {
    PLAYLIST_MARKERS.iter().any(|marker| url.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_both_host_forms() {
        assert!(detect_url("https://www.youtube.com/watch?v=abc"));
        assert!(detect_url("https://youtu.be/abc"));
        assert!(detect_url("see youtube.com for more"));
    }

    #[test]
    fn rejects_empty_and_unrelated_text() {
        assert!(!detect_url(""));
        assert!(!detect_url("shopping list: eggs"));
        assert!(!detect_url("https://vimeo.com/12345"));
    }

    #[test]
    fn recognises_playlist_markers() {
        assert!(is_playlist("https://www.youtube.com/playlist?list=PL123"));
        assert!(is_playlist("https://www.youtube.com/watch?v=abc&list=PL123"));
        assert!(!is_playlist("https://youtu.be/abc"));
    }
}
