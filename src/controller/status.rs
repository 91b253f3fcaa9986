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

//! The single-line status message.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Error,
    Success,
    Loading,
}

/// Transient status text with a generation counter.
///
/// Every [`show`](StatusLine::show) starts a new generation, and
/// [`dismiss`](StatusLine::dismiss) only hides the message it was issued for.
#[derive(Debug, Default)]
pub(crate) struct StatusLine {
    message: String,
    kind: Option<StatusKind>,
    generation: u64,
}

impl StatusLine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show(&mut self, message: impl Into<String>, kind: StatusKind) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.kind = Some(kind);
        self.generation
    }

    /// Hides the message if it is still the one from `generation`.
    pub(crate) fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.kind.is_none() {
            return false;
        }

        self.kind = None;
        true
    }

    pub(crate) fn current(&self) -> Option<(&str, StatusKind)> {
        self.kind.map(|kind| (self.message.as_str(), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_dismiss_keeps_newer_message() {
        let mut status = StatusLine::new();
        let first = status.show("Found 3 track(s)!", StatusKind::Success);
        status.show("Downloaded 3 track(s)! Check your music library.", StatusKind::Success);

        assert!(!status.dismiss(first));
        assert_eq!(
            status.current(),
            Some(("Downloaded 3 track(s)! Check your music library.", StatusKind::Success))
        );
    }

    #[test]
    fn current_dismiss_hides_message() {
        let mut status = StatusLine::new();
        let generation = status.show("Found 1 track(s)!", StatusKind::Success);

        assert!(status.dismiss(generation));
        assert_eq!(status.current(), None);
        assert!(!status.dismiss(generation));
    }
}
