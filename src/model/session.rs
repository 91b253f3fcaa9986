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

//! Session state.
//!
//! A [`Session`] holds the URL the current track list was parsed from, the
//! tracks themselves in backend order, and whether a remote call is in
//! flight. The track list is only ever replaced wholesale.

use std::collections::HashSet;

use tracing::warn;

use crate::model::Track;

#[derive(Debug, Default)]
pub(crate) struct Session {
    pub(crate) current_url: String,
    tracks: Vec<Track>,
    pub(crate) loading: bool,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Replaces the track list, keeping the first occurrence of any
    /// duplicated id so that ids stay unique.
    pub(crate) fn replace_tracks(&mut self, tracks: Vec<Track>) {
        let mut seen = HashSet::with_capacity(tracks.len());

        self.tracks = tracks
            .into_iter()
            .filter(|track| {
                let fresh = seen.insert(track.id.clone());
                if !fresh {
                    warn!(id = %track.id, "dropping duplicate track id from parse result");
                }
                fresh
            })
            .collect();
    }

    /// Flips the selection of the track with `id`, returning `false` when no
    /// such track exists.
    pub(crate) fn toggle(&mut self, id: &str) -> bool {
        match self.tracks.iter_mut().find(|t| t.id == id) {
            Some(track) => {
                track.selected = !track.selected;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_all_selected(&mut self, selected: bool) {
        for track in self.tracks.iter_mut() {
            track.selected = selected;
        }
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.selected).count()
    }

    pub(crate) fn selected_ids(&self) -> Vec<String> {
        self.tracks
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(ids: &[&str]) -> Session {
        let mut session = Session::new();
        session.replace_tracks(ids.iter().map(|id| Track::new(*id, format!("Song {id}"), "3:00")).collect());
        session
    }

    #[test]
    fn replace_keeps_backend_order() {
        let session = session_with(&["c", "a", "b"]);
        let ids: Vec<&str> = session.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn replace_drops_duplicate_ids() {
        let session = session_with(&["a", "b", "a"]);
        assert_eq!(session.tracks().len(), 2);
    }

    #[test]
    fn toggle_unknown_id_is_ignored() {
        let mut session = session_with(&["a"]);
        assert!(!session.toggle("zzz"));
        assert_eq!(session.selected_count(), 0);
    }

    #[test]
    fn selected_ids_follow_list_order() {
        let mut session = session_with(&["a", "b", "c"]);
        session.toggle("c");
        session.toggle("a");
        assert_eq!(session.selected_ids(), ["a", "c"]);
    }
}
