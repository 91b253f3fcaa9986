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

//! System clipboard access.
//!
//! Reading the clipboard may be refused or simply unsupported (headless
//! sessions, SSH, no display server). None of that is an error for the user,
//! so every failure collapses to `None` and is only logged at debug level.

use arboard::Clipboard;
use tracing::debug;

pub(crate) trait ClipboardSource {
    fn read_text(&mut self) -> Option<String>;
}

/// Clipboard backed by the platform clipboard.
///
/// The platform handle is opened on first use, so this must be created on the
/// thread that reads from it.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Option<&mut Clipboard> {
        if self.inner.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => {
                    debug!("clipboard unavailable: {e}");
                    return None;
                }
            }
        }

        self.inner.as_mut()
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        let clipboard = self.handle()?;

        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("clipboard read failed: {e}");
                None
            }
        }
    }
}
