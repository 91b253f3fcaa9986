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

//! Delayed application events.
//!
//! A scheduled event is delivered to the main event loop after a delay. Events
//! are not cancelled; instead they carry a generation number which the
//! receiver compares with its current one, so a superseded event does nothing.

use std::{sync::mpsc::Sender, thread, time::Duration};

use crate::events::AppEvent;

#[derive(Clone)]
pub(crate) struct Scheduler {
    event_tx: Sender<AppEvent>,
}

impl Scheduler {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx }
    }

    pub(crate) fn schedule(&self, delay: Duration, event: AppEvent) {
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver is gone once the application has exited
            let _ = event_tx.send(event);
        });
    }
}
