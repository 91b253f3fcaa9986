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

//! Input handling and event processing for the track table.
//!
//! This module maps raw terminal keyboard events to table navigation and to
//! the selection and download actions reported back to the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable {
    /// Handles a key press for a table of `len` rows.
    pub(crate) fn process_event(&mut self, key: &KeyEvent, len: usize) -> Option<TrackTableAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(len),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(len),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(len),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(len),

            (KeyCode::Char('a'), _) => return Some(TrackTableAction::SelectAll),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) | (KeyCode::Char('n'), _) => {
                return Some(TrackTableAction::SelectNone);
            }

            (KeyCode::Char(' '), _) => {
                let current = self.current(len);
                self.goto_next(len);
                return current.map(TrackTableAction::Toggle);
            }

            (KeyCode::Backspace, _) => {
                let current = self.current(len);
                self.goto_previous(len);
                return current.map(TrackTableAction::Toggle);
            }

            (KeyCode::Enter, _) | (KeyCode::Char('d'), _) => return Some(TrackTableAction::Download),

            _ => {}
        }

        None
    }
}
