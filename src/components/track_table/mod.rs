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

//! Interactive track table widget and state management.
//!
//! This module provides the table listing parsed tracks with a checkbox per
//! row. The table only owns the highlighted row; which tracks are selected
//! lives in the session, so the table reports [`TrackTableAction`]s instead
//! of changing selection itself.

mod event;
mod render;

use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    /// Flip the selection of the track at this row.
    Toggle(usize),
    SelectAll,
    SelectNone,
    Download,
}

pub(crate) struct TrackTable {
    table_state: TableState,
}

impl TrackTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// Moves the highlight back to the top of a freshly loaded list.
    pub(crate) fn reset(&mut self, len: usize) {
        let first = if len == 0 { None } else { Some(0) };
        self.table_state = TableState::new().with_selected(first);
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 || i >= len { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// The highlighted row, if it is still inside a list of `len` rows.
    fn current(&self, len: usize) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < len)
    }
}
