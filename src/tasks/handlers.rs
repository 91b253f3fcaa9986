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

use anyhow::Result;
use tracing::debug;

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn read_clipboard(ctx: &mut TaskContext) -> Result<()> {
    let text = ctx.clipboard.read_text();
    ctx.event_tx.send(AppEvent::ClipboardRead(text))?;

    Ok(())
}

pub(super) fn parse(ctx: &mut TaskContext, url: String) -> Result<()> {
    debug!(%url, "calling backend parse");
    let outcome = ctx.backend.parse(&url);
    ctx.event_tx.send(AppEvent::ParseCompleted { url, outcome })?;

    Ok(())
}

pub(super) fn download(ctx: &mut TaskContext, url: String, track_ids: Vec<String>) -> Result<()> {
    debug!(%url, count = track_ids.len(), "calling backend download");
    let outcome = ctx.backend.download(&url, &track_ids);
    ctx.event_tx.send(AppEvent::DownloadCompleted(outcome))?;

    Ok(())
}

pub(super) fn check_status(ctx: &mut TaskContext) -> Result<()> {
    let outcome = ctx.backend.status();
    ctx.event_tx.send(AppEvent::BackendStatus(outcome))?;

    Ok(())
}
